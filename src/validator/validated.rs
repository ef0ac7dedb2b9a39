use crate::model::IntersectionConfig;
use serde::Serialize;
use std::ops::Deref;

/// An intersection that passed every semantic rule.
///
/// Only `SemanticValidator` constructs this, and it hands out shared
/// references only, so a validated model can no longer change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(IntersectionConfig);

impl ValidatedConfig {
    pub(crate) fn new(config: IntersectionConfig) -> Self {
        Self(config)
    }

    pub fn config(&self) -> &IntersectionConfig {
        &self.0
    }

    /// Gives up the validated status
    pub fn into_inner(self) -> IntersectionConfig {
        self.0
    }
}

impl Deref for ValidatedConfig {
    type Target = IntersectionConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<IntersectionConfig> for ValidatedConfig {
    fn as_ref(&self) -> &IntersectionConfig {
        &self.0
    }
}

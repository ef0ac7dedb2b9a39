use crate::controller::phase::{ControllerState, Phase};
use crate::controller::strategy::{ControllerStrategy, Strategy};
use crate::error::Result;
use crate::validator::ValidatedConfig;
use log::info;

/// Owns a validated intersection and the strategy chosen for its type
#[derive(Debug, Clone)]
pub struct Controller {
    config: ValidatedConfig,
    strategy: Strategy,
    state: Option<ControllerState>,
}

impl Controller {
    pub fn new(config: ValidatedConfig) -> Self {
        let strategy = Strategy::for_type(config.intersection_type);
        Self {
            config,
            strategy,
            state: None,
        }
    }

    pub fn init(&mut self) -> Result<ControllerState> {
        let state = self.strategy.init(&self.config)?;
        info!(
            "Controller for '{}' initialized on {} ({} phases)",
            self.config.identifier.id,
            state.current_phase,
            self.phases().len()
        );
        self.state = Some(state);
        Ok(state)
    }

    pub fn phases(&self) -> Vec<Phase> {
        self.strategy.phases(&self.config)
    }

    pub fn state(&self) -> Option<&ControllerState> {
        self.state.as_ref()
    }

    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    pub fn config(&self) -> &ValidatedConfig {
        &self.config
    }
}

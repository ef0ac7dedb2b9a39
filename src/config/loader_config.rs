use crate::document::DocumentFormat;
use crate::model::limits::MAX_IDENTIFIER_LENGTH;

/// Configuration for IntersectionLoader
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    /// Maximum document size in bytes (Default: 1MB)
    pub max_document_size: u64,

    /// Maximum identifier length in characters (Default: 63)
    pub max_identifier_length: usize,

    /// Forced document format; `None` detects it from the file extension
    pub format: Option<DocumentFormat>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            max_document_size: 1_048_576, // 1MB
            max_identifier_length: MAX_IDENTIFIER_LENGTH,
            format: None,
        }
    }
}

impl LoaderConfig {
    /// Create a new configuration with all default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with restrictive limits
    pub fn strict() -> Self {
        Self {
            max_document_size: 65_536, // 64KB
            max_identifier_length: 32,
            format: None,
        }
    }

    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_document_size(mut self, bytes: u64) -> Self {
        self.max_document_size = bytes;
        self
    }

    /// Validate the configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_document_size == 0 {
            return Err("max_document_size must be greater than 0".to_string());
        }

        if self.max_identifier_length == 0 || self.max_identifier_length > 255 {
            return Err(format!(
                "max_identifier_length must be between 1 and 255, got {}",
                self.max_identifier_length
            ));
        }

        Ok(())
    }
}

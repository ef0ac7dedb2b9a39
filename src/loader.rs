//! Load pipeline: source document, typed parse, semantic validation.

use crate::config::LoaderConfig;
use crate::document::{Document, DocumentFormat, DocumentNode, DocumentSource};
use crate::error::{ConfigError, Result};
use crate::parser::ConfigParser;
use crate::validator::{SemanticValidator, ValidatedConfig};
use log::{debug, info};
use std::path::Path;

/// Produces validated intersections. Every call yields an independent model.
pub struct IntersectionLoader {
    parser: ConfigParser,
}

impl IntersectionLoader {
    pub fn new(config: LoaderConfig) -> Result<Self> {
        config.validate().map_err(ConfigError::InvalidLoaderConfig)?;
        Ok(Self {
            parser: ConfigParser::new(config)?,
        })
    }

    pub fn config(&self) -> &LoaderConfig {
        self.parser.config()
    }

    /// Load, parse and validate the document at `path`
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ValidatedConfig> {
        let path = path.as_ref();
        let document = DocumentSource::read(path, self.config())?;
        let validated = self.load_parsed(&document)?;
        info!(
            "Successfully loaded and validated intersection '{}' from {}",
            validated.identifier.id,
            path.display()
        );
        Ok(validated)
    }

    /// Load from in-memory text
    pub fn load_str(&self, text: &str, format: DocumentFormat) -> Result<ValidatedConfig> {
        let size = text.len() as u64;
        if size > self.config().max_document_size {
            return Err(ConfigError::DocumentTooLarge {
                source_name: "<string>".to_string(),
                size,
                limit: self.config().max_document_size,
            });
        }
        let document = Document::parse(text, format, "<string>")?;
        self.load_parsed(&document)
    }

    /// Load from an already parsed tree
    pub fn load_document<N: DocumentNode>(&self, root: &N) -> Result<ValidatedConfig> {
        let config = self.parser.parse(root)?;
        debug!("Parse stage complete for '{}'", config.identifier.id);
        SemanticValidator::validate(config)
    }

    fn load_parsed(&self, document: &Document) -> Result<ValidatedConfig> {
        let config = self.parser.parse_document(document)?;
        debug!(
            "Parse stage complete for '{}' ({} document)",
            config.identifier.id,
            document.format()
        );
        SemanticValidator::validate(config)
    }
}

/// Load a file with default limits
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ValidatedConfig> {
    IntersectionLoader::new(LoaderConfig::default())?.load_file(path)
}

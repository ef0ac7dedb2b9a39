use crate::config::LoaderConfig;
use crate::error::{ConfigError, Result};
use log::{debug, info, warn};
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Serialization format of a source document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Detects the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(DocumentFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Some(DocumentFormat::Yaml)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            other => Err(format!("unknown document format '{}'", other)),
        }
    }
}

/// A parsed but untyped document tree
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Json(serde_json::Value),
    #[cfg(feature = "yaml-support")]
    Yaml(serde_yaml::Value),
}

impl Document {
    /// Parses document text. `source_name` only labels diagnostics.
    pub fn parse(text: &str, format: DocumentFormat, source_name: &str) -> Result<Self> {
        debug!(
            "Parsing {} document '{}' ({} bytes)",
            format,
            source_name,
            text.len()
        );

        if text.trim().is_empty() {
            return Err(ConfigError::document_load(source_name, "document is empty"));
        }

        match format {
            DocumentFormat::Json => serde_json::from_str(text)
                .map(Document::Json)
                .map_err(|e| {
                    ConfigError::document_load(
                        source_name,
                        format!(
                            "JSON syntax error at line {}, column {}: {}",
                            e.line(),
                            e.column(),
                            e
                        ),
                    )
                }),
            #[cfg(feature = "yaml-support")]
            DocumentFormat::Yaml => serde_yaml::from_str(text).map(Document::Yaml).map_err(|e| {
                let reason = match e.location() {
                    Some(location) => format!(
                        "YAML syntax error at line {}, column {}: {}",
                        location.line(),
                        location.column(),
                        e
                    ),
                    None => format!("YAML syntax error: {}", e),
                };
                ConfigError::document_load(source_name, reason)
            }),
            #[cfg(not(feature = "yaml-support"))]
            DocumentFormat::Yaml => Err(ConfigError::document_load(
                source_name,
                "YAML support not enabled. Enable 'yaml-support' feature.",
            )),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        match self {
            Document::Json(_) => DocumentFormat::Json,
            #[cfg(feature = "yaml-support")]
            Document::Yaml(_) => DocumentFormat::Yaml,
        }
    }
}

/// Reads documents from the filesystem.
///
/// The file handle lives only for the duration of `read`.
pub struct DocumentSource;

impl DocumentSource {
    pub fn read(path: &Path, config: &LoaderConfig) -> Result<Document> {
        let source_name = path.display().to_string();
        info!("Loading intersection document from: {}", source_name);

        let mut file = File::open(path).map_err(|e| {
            ConfigError::document_load(&source_name, format!("cannot open file: {}", e))
        })?;

        let size = file
            .metadata()
            .map_err(|e| {
                ConfigError::document_load(&source_name, format!("cannot stat file: {}", e))
            })?
            .len();
        debug!("File found: {} ({} bytes)", source_name, size);

        if size > config.max_document_size {
            return Err(ConfigError::DocumentTooLarge {
                source_name,
                size,
                limit: config.max_document_size,
            });
        }
        if size == 0 {
            warn!("Intersection document is empty: {}", source_name);
        }

        // The file may grow between stat and read
        let mut content = String::new();
        (&mut file)
            .take(config.max_document_size + 1)
            .read_to_string(&mut content)
            .map_err(|e| {
                ConfigError::document_load(&source_name, format!("cannot read file: {}", e))
            })?;
        if content.len() as u64 > config.max_document_size {
            return Err(ConfigError::DocumentTooLarge {
                source_name,
                size: content.len() as u64,
                limit: config.max_document_size,
            });
        }

        let format = match config.format {
            Some(format) => format,
            None => DocumentFormat::from_path(path).unwrap_or_else(|| {
                warn!(
                    "Unknown file extension for {}, defaulting to JSON format",
                    source_name
                );
                DocumentFormat::Json
            }),
        };

        Document::parse(&content, format, &source_name)
    }
}

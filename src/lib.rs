//! # intersection-config
//!
//! Typed loader and semantic validator for signalized two-road intersection
//! configurations. A document is parsed into a strongly typed model, checked
//! against the cross-field traffic rules, and only then handed to a controller.
//!
//! ## Pipeline
//!
//! - **Document access**: JSON or YAML tree behind the `DocumentNode` trait
//! - **Typed parser**: required fields, enum tokens, bounds, fixed cardinalities
//! - **Semantic validator**: direction pairs, uniqueness, turn legality, detector placement
//! - **Controller**: per-intersection-type strategy over the validated model
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use intersection_config::{Controller, IntersectionLoader, LoaderConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = IntersectionLoader::new(LoaderConfig::default())?;
//!     let validated = loader.load_file("intersection.json")?;
//!
//!     let mut controller = Controller::new(validated);
//!     let state = controller.init()?;
//!     println!("Starting on {}", state.current_phase);
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod controller;
pub mod document;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod validator;

// Document access exports
pub use document::{Document, DocumentFormat, DocumentNode, DocumentSource};

// Model exports
pub use model::{
    Axis, Detector, DetectorKind, Direction, DirectionPair, DirectionType, Identifier,
    IntersectionConfig, IntersectionType, LaneGroup, Movement, PedestrianCrossing, Road,
    RoadIndex,
};

// Parsing and validation exports
pub use parser::ConfigParser;
pub use validator::{Rule, SemanticValidator, SetbackTable, ValidatedConfig};
pub use loader::{load_config, IntersectionLoader};

// Controller exports
pub use controller::{Controller, ControllerState, ControllerStrategy, Phase, SignalState, Strategy};

// Configuration exports
pub use config::LoaderConfig;

// Error exports
pub use error::{ConfigError, ErrorCode, Stage};

// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Prelude module for convenient importing
pub mod prelude {
    pub use crate::{
        load_config, ConfigError, ConfigParser, Controller, DirectionType, DocumentFormat,
        ErrorCode, IntersectionConfig, IntersectionLoader, IntersectionType, LoaderConfig,
        Movement, Result, SemanticValidator, ValidatedConfig,
    };
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "intersection-config");
    }
}

pub mod rules;
pub mod semantic_validator;
pub mod setback_table;
pub mod validated;

pub use rules::Rule;
pub use semantic_validator::SemanticValidator;
pub use setback_table::SetbackTable;
pub use validated::ValidatedConfig;

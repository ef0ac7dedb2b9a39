pub mod node;
pub mod source;

pub use node::DocumentNode;
pub use source::{Document, DocumentFormat, DocumentSource};

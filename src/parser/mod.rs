pub mod config_parser;
mod fields;

pub use config_parser::ConfigParser;

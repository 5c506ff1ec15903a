/// Eml analyzer service interface
pub mod analyzer;

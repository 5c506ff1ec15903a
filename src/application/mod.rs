/// Client implementing the analyzer interface
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;

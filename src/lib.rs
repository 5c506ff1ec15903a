//! # eml-client
//!
//! Typed async client for the eml analyzer REST API.
//!
//! The backend parses uploaded emails, runs them through a set of analyzers
//! (SpamAssassin, VirusTotal, urlscan.io, ...) and returns a verdict per
//! analyzer. This crate wraps its endpoints: every call issues exactly one
//! HTTP request through a shared connection pool and validates the reply
//! against the expected schema before returning it.
//!
//! | Operation              | Endpoint                      |
//! |------------------------|-------------------------------|
//! | `analyze`              | `POST /api/analyze/file`      |
//! | `analyze_text`         | `POST /api/analyze/`          |
//! | `get_plaintext_body`   | `POST /api/analyze/body`      |
//! | `lookup`               | `GET /api/lookup/:id`         |
//! | `get_cache_keys`       | `GET /api/cache/`             |
//! | `get_status`           | `GET /api/status/`            |
//! | `chatgpt`              | `POST /api/submit/chatgpt`    |
//! | `submit_to_inquest`    | `POST /api/submit/inquest`    |
//! | `submit_to_virustotal` | `POST /api/submit/virustotal` |
//!
//! ## Configuration
//!
//! `Config::new()` reads `EML_API_BASE_URL`, `EML_API_TIMEOUT` and
//! `EML_CHAT_MODEL`, loading a `.env` file first when present.
//!
//! ## Example
//!
//! ```ignore
//! use eml_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     setup_logger();
//!     let client = Client::from_env()?;
//!     let status = client.get_status().await?;
//!     info!("\n{}", status);
//!     Ok(())
//! }
//! ```

/// Application layer: configuration, service interface and client
pub mod application;
/// Global constants
pub mod constants;
/// Error type
pub mod error;
/// Transport and request/response models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Backend schema types
pub mod presentation;
/// Utilities
pub mod utils;

pub use application::config;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

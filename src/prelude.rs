/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Imports everything needed for typical use of the client.
//!
//! ```rust
//! use eml_client::prelude::*;
//!
//! let config = Config::with_base_url("http://localhost:8000");
//! let client = Client::new(config).unwrap();
//! assert_eq!(client.http_client().base_url(), "http://localhost:8000");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the analyzer client
pub use crate::application::config::{ChatConfig, Config, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, AppResult};

// ============================================================================
// CLIENT
// ============================================================================

/// Analyzer service trait
pub use crate::application::interfaces::analyzer::EmlAnalyzerService;

/// Client implementation
pub use crate::application::client::Client;

/// Transport
pub use crate::model::http::HttpClient;

// ============================================================================
// MODELS
// ============================================================================

/// Request models
pub use crate::model::requests::{ChatPrompt, ChatRequest, EmlPayload, UploadFile};

/// Response envelopes
pub use crate::model::responses::{ChatResponse, PlaintextBody, SubmissionResult};

/// Backend schema types
pub use crate::presentation::{
    Attachment, Body, Eml, Hash, Header, HeaderValue, Received, Response, Status, Verdict,
    VerdictDetail,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::path::Path;
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Reply of the chat proxy endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChatResponse {
    /// Model output
    pub response: String,
}

/// Reply of the attachment submission endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    /// Where the submitted file's report can be viewed
    pub reference_url: String,
}

/// Reply of the plaintext body endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PlaintextBody {
    /// First `text/plain` part, empty when the email has none
    pub body: String,
}

/// Error body produced by the backend for non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: serde_json::Value,
}

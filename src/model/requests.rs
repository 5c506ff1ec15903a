/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{DEFAULT_CHAT_MODEL, DEFAULT_CHAT_PROMPT};
use crate::presentation::eml::{Body, Header};
use pretty_simple_display::DisplaySimple;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};

/// File uploaded to the multipart analyze endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// Name reported in the multipart part
    pub file_name: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wraps raw bytes under a file name
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Multipart form with a single `file` part
    #[must_use]
    pub fn into_form(self) -> Form {
        Form::new().part("file", Part::bytes(self.bytes).file_name(self.file_name))
    }
}

/// JSON payload carrying an eml as text
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmlPayload {
    /// Full eml source
    pub file: String,
}

impl EmlPayload {
    /// Payload for the given eml source
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }
}

/// Prompt section of a chat request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatPrompt {
    /// Instructions prepended to the header and body
    pub prompt: String,
    /// Model name
    pub model: String,
}

impl ChatPrompt {
    /// Prompt with an explicit model
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: model.into(),
        }
    }
}

impl Default for ChatPrompt {
    fn default() -> Self {
        Self::new(DEFAULT_CHAT_PROMPT, DEFAULT_CHAT_MODEL)
    }
}

/// Request body of the chat proxy endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest<'a> {
    /// Header of the email under discussion
    pub header: &'a Header,
    /// Body part under discussion
    pub body: &'a Body,
    /// Instructions and model
    pub prompt: ChatPrompt,
}

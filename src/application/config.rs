use crate::constants::{DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the analyzer client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Chat proxy configuration
    pub chat: ChatConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the analyzer backend, without the `/api` prefix
    pub base_url: String,
    /// Timeout in seconds for each request, 0 disables it
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the chat-completion proxy
pub struct ChatConfig {
    /// Model used when a call does not name one
    pub model: String,
}

impl RestApiConfig {
    /// Per-request timeout, `None` when disabled
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout > 0).then(|| Duration::from_secs(self.timeout))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first if present.
    ///
    /// | Variable            | Default                 |
    /// |---------------------|-------------------------|
    /// | `EML_API_BASE_URL`  | `http://localhost:8000` |
    /// | `EML_API_TIMEOUT`   | `30`                    |
    /// | `EML_CHAT_MODEL`    | `gpt-3.5-turbo`         |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            rest_api: RestApiConfig {
                base_url: get_env_or_default("EML_API_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("EML_API_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            chat: ChatConfig {
                model: get_env_or_default("EML_CHAT_MODEL", String::from(DEFAULT_CHAT_MODEL)),
            },
        }
    }

    /// Configuration pointing at `base_url` with every other value defaulted
    ///
    /// Does not read the environment.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.into(),
                timeout: DEFAULT_TIMEOUT_SECS,
            },
            chat: ChatConfig {
                model: DEFAULT_CHAT_MODEL.to_string(),
            },
        }
    }
}

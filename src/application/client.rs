/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the eml analyzer REST API
//!
//! # Example
//! ```ignore
//! use eml_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let response = client.analyze_path(Path::new("sample.eml")).await?;
//! println!("{response}");
//! ```

use crate::application::config::Config;
use crate::application::interfaces::analyzer::EmlAnalyzerService;
use crate::constants::{
    ANALYZE_BODY_PATH, ANALYZE_FILE_PATH, ANALYZE_TEXT_PATH, CACHE_PATH, LOOKUP_PATH,
    STATUS_PATH, SUBMIT_CHATGPT_PATH, SUBMIT_INQUEST_PATH, SUBMIT_VIRUSTOTAL_PATH,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{ChatPrompt, ChatRequest, EmlPayload, UploadFile};
use crate::model::responses::{ChatResponse, PlaintextBody, SubmissionResult};
use crate::presentation::{Attachment, Body, Header, Response, Status};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Client for the eml analyzer backend
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
    config: Arc<Config>,
}

impl Client {
    /// Creates a client for the configured backend
    ///
    /// No request is made until the first operation.
    ///
    /// # Returns
    /// * `Ok(Client)` - Ready to use
    /// * `Err(AppError)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(&config.rest_api)?);
        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Creates a client configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::new(Config::new())
    }

    /// Gets the configuration the client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl EmlAnalyzerService for Client {
    async fn analyze(&self, file: UploadFile) -> Result<Response, AppError> {
        info!("Analyzing file: {} ({} bytes)", file.file_name, file.bytes.len());
        let response: Response = self
            .http_client
            .post_multipart(ANALYZE_FILE_PATH, file.into_form())
            .await?;
        debug!(
            "Analysis {} obtained: {} verdicts",
            response.id,
            response.verdicts.len()
        );
        Ok(response)
    }

    async fn analyze_path(&self, path: &Path) -> Result<Response, AppError> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| AppError::InvalidInput(format!("no file name in {}", path.display())))?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        self.analyze(UploadFile::new(file_name, bytes)).await
    }

    async fn analyze_text(&self, eml: &str) -> Result<Response, AppError> {
        info!("Analyzing eml text ({} bytes)", eml.len());
        let response: Response = self
            .http_client
            .post_json(ANALYZE_TEXT_PATH, &EmlPayload::new(eml))
            .await?;
        debug!(
            "Analysis {} obtained: {} verdicts",
            response.id,
            response.verdicts.len()
        );
        Ok(response)
    }

    async fn lookup(&self, id: &str) -> Result<Response, AppError> {
        info!("Looking up analysis: {}", id);
        let url = self.http_client.segment_url(LOOKUP_PATH, id)?;
        self.http_client.get_url(url).await
    }

    async fn get_cache_keys(&self) -> Result<Vec<String>, AppError> {
        info!("Getting cache keys");
        let keys: Vec<String> = self.http_client.get_list(CACHE_PATH).await?;
        debug!("Cache keys obtained: {}", keys.len());
        Ok(keys)
    }

    async fn get_status(&self) -> Result<Status, AppError> {
        info!("Getting backend status");
        self.http_client.get(STATUS_PATH).await
    }

    async fn chatgpt(
        &self,
        header: &Header,
        body: &Body,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<String, AppError> {
        let model = model.unwrap_or(self.config.chat.model.as_str());
        info!("Sending chat prompt with model {}", model);
        let request = ChatRequest {
            header,
            body,
            prompt: ChatPrompt::new(prompt, model),
        };
        let reply: ChatResponse = self
            .http_client
            .post_json(SUBMIT_CHATGPT_PATH, &request)
            .await?;
        debug!("Chat reply obtained: {} chars", reply.response.len());
        Ok(reply.response)
    }

    async fn get_plaintext_body(&self, eml: &str) -> Result<String, AppError> {
        info!("Extracting plaintext body");
        let reply: PlaintextBody = self
            .http_client
            .post_json(ANALYZE_BODY_PATH, &EmlPayload::new(eml))
            .await?;
        Ok(reply.body)
    }

    async fn submit_to_inquest(
        &self,
        attachment: &Attachment,
    ) -> Result<SubmissionResult, AppError> {
        info!("Submitting {} to InQuest", attachment.filename);
        self.http_client
            .post_json(SUBMIT_INQUEST_PATH, attachment)
            .await
    }

    async fn submit_to_virustotal(
        &self,
        attachment: &Attachment,
    ) -> Result<SubmissionResult, AppError> {
        info!("Submitting {} to VirusTotal", attachment.filename);
        self.http_client
            .post_json(SUBMIT_VIRUSTOTAL_PATH, attachment)
            .await
    }
}

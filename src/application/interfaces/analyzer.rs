use crate::error::AppError;
use crate::model::requests::UploadFile;
use crate::model::responses::SubmissionResult;
use crate::presentation::{Attachment, Body, Header, Response, Status};
use async_trait::async_trait;
use std::path::Path;

/// Interface for the eml analyzer backend
///
/// Every method is one request/response round trip. Transport and schema
/// validation failures are returned to the caller unchanged.
#[async_trait]
pub trait EmlAnalyzerService: Send + Sync {
    /// Uploads an eml file as multipart form data and returns its analysis
    async fn analyze(&self, file: UploadFile) -> Result<Response, AppError>;

    /// Reads a local eml file and uploads it with its file name
    async fn analyze_path(&self, path: &Path) -> Result<Response, AppError>;

    /// Sends an eml as text and returns its analysis
    async fn analyze_text(&self, eml: &str) -> Result<Response, AppError>;

    /// Fetches a cached analysis by id (the SHA-256 of the analyzed file)
    async fn lookup(&self, id: &str) -> Result<Response, AppError>;

    /// Lists the keys currently held in the backend cache
    async fn get_cache_keys(&self) -> Result<Vec<String>, AppError>;

    /// Gets which integrations are enabled on the backend
    async fn get_status(&self) -> Result<Status, AppError>;

    /// Asks the chat proxy to comment on a header and body
    ///
    /// # Arguments
    /// * `header` - Header of the email under discussion
    /// * `body` - Body part under discussion
    /// * `prompt` - Instructions prepended by the backend to header and body
    /// * `model` - Model name, the configured default when `None`
    ///
    /// # Returns
    /// * The model's reply text
    async fn chatgpt(
        &self,
        header: &Header,
        body: &Body,
        prompt: &str,
        model: Option<&str>,
    ) -> Result<String, AppError>;

    /// Extracts the first `text/plain` body of an eml without analyzing it
    async fn get_plaintext_body(&self, eml: &str) -> Result<String, AppError>;

    /// Submits an attachment to InQuest
    async fn submit_to_inquest(
        &self,
        attachment: &Attachment,
    ) -> Result<SubmissionResult, AppError>;

    /// Submits an attachment to VirusTotal
    async fn submit_to_virustotal(
        &self,
        attachment: &Attachment,
    ) -> Result<SubmissionResult, AppError>;
}

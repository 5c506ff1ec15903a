/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::application::config::RestApiConfig;
use crate::constants::{REQUEST_ID_HEADER, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::ErrorBody;
use crate::utils::id::request_id;
use reqwest::header::ACCEPT;
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

/// Body attached to an outgoing request
pub enum RequestBody<'a, B: Serialize> {
    /// No body
    Empty,
    /// Serialized as JSON
    Json(&'a B),
    /// Sent as `multipart/form-data`
    Multipart(Form),
}

/// Transport shared by every operation of the client
///
/// Owns a single `reqwest` connection pool and the backend base URL. Every
/// successful reply is parsed as JSON and validated into the requested type
/// before it is handed back.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Builds the transport from the REST configuration
    ///
    /// # Returns
    /// * `Ok(HttpClient)` - Ready to send requests
    /// * `Err(AppError)` - If the underlying client cannot be built
    pub fn new(config: &RestApiConfig) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL every relative path is resolved against
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves `path` against the base URL
    ///
    /// Absolute `http(s)://` paths are used unchanged. Trailing slashes of
    /// `path` are kept since the backend routes on them.
    pub fn url(&self, path: &str) -> Result<Url, AppError> {
        let raw = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        };
        Url::parse(&raw).map_err(|e| AppError::InvalidInput(format!("invalid url {raw}: {e}")))
    }

    /// Resolves `path` and appends `segment` as one percent-encoded segment
    pub fn segment_url(&self, path: &str, segment: &str) -> Result<Url, AppError> {
        if segment.is_empty() {
            return Err(AppError::InvalidInput("path segment is empty".to_string()));
        }
        let mut url = self.url(path)?;
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidInput("base url cannot take path segments".to_string()))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    /// Makes a GET request to a relative path
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.url(path)?;
        self.get_url(url).await
    }

    /// Makes a GET request whose reply is a JSON array of `T`
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let url = self.url(path)?;
        let response =
            make_http_request(&self.http_client, Method::GET, url, RequestBody::<()>::Empty)
                .await?;
        validate(parse_json(response).await?)
    }

    /// Makes a GET request to an already resolved URL
    pub async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T, AppError> {
        self.request(Method::GET, url, RequestBody::<()>::Empty)
            .await
    }

    /// Makes a POST request with a JSON body
    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let url = self.url(path)?;
        self.request(Method::POST, url, RequestBody::Json(body)).await
    }

    /// Makes a POST request with a multipart form body
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> Result<T, AppError> {
        let url = self.url(path)?;
        self.request(Method::POST, url, RequestBody::<()>::Multipart(form))
            .await
    }

    /// Sends a request and validates the reply into the object schema `T`
    pub async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: RequestBody<'_, B>,
    ) -> Result<T, AppError> {
        let response = make_http_request(&self.http_client, method, url, body).await?;
        parse_response(response).await
    }
}

/// Sends one HTTP request and maps non-success statuses to errors
///
/// Every request carries `Accept: application/json` and a fresh
/// `X-Request-ID` that is also written to the debug log.
///
/// # Returns
///
/// * `Ok(Response)` - Any 2xx response, body unread
/// * `Err(AppError::NotFound)` - The backend answered 404
/// * `Err(AppError::Api)` - Any other non-success status, with the backend's `detail`
/// * `Err(AppError::Network)` - The request could not be sent
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: Url,
    body: RequestBody<'_, B>,
) -> Result<Response, AppError> {
    let request_id = request_id();
    debug!("{} {} [{}]", method, url, request_id);

    let mut request = client
        .request(method, url)
        .header(ACCEPT, "application/json")
        .header(REQUEST_ID_HEADER, request_id.as_str());

    request = match body {
        RequestBody::Empty => request,
        RequestBody::Json(b) => request.json(b),
        RequestBody::Multipart(form) => request.multipart(form),
    };

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {} [{}]", status, request_id);

    if status.is_success() {
        return Ok(response);
    }

    let body_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to read error body [{}]: {}", request_id, e);
            String::new()
        }
    };
    let detail = error_detail(&body_text);
    match status {
        StatusCode::NOT_FOUND => {
            warn!("Not found [{}]: {}", request_id, detail);
            Err(AppError::NotFound)
        }
        _ => {
            error!(
                "Request failed with status {} [{}]: {}",
                status, request_id, detail
            );
            Err(AppError::Api { status, detail })
        }
    }
}

/// Extracts the `detail` field of an error body, or returns the raw body
///
/// A structured `detail` (validation error lists) is rendered as JSON.
#[must_use]
pub fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: Value::String(s),
        }) => s,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Reads the body of a successful response as JSON
pub async fn parse_json(response: Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Reads a successful response as JSON and validates it into the object schema `T`
pub async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    validate_object(parse_json(response).await?)
}

/// Validates a JSON value against the schema of `T`
///
/// # Returns
/// * `Ok(T)` - The value has every required key with the right type
/// * `Err(AppError::Validation)` - Naming `T` and the first mismatch
pub fn validate<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value)
        .map_err(|e| AppError::Validation(format!("{}: {e}", std::any::type_name::<T>())))
}

/// Validates a JSON value that must be an object against the schema of `T`
///
/// Derived struct deserializers also take positional arrays, so anything
/// other than a JSON object is rejected before `validate` runs.
pub fn validate_object<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    if !value.is_object() {
        return Err(AppError::Validation(format!(
            "{}: expected a JSON object, found {}",
            std::any::type_name::<T>(),
            json_kind(&value)
        )));
    }
    validate(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

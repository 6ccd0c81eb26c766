//! HTTP client for the Finsight data service REST API.
//!
//! Every repository in this crate goes through [`DataServiceClient`], so
//! request logging, auth headers and error mapping live in one place.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DataServiceConfig;
use crate::errors::DataServiceError;

/// Longest slice of a raw error body quoted in an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

/// HTTP client for the data service.
///
/// # Example
///
/// ```ignore
/// let client = DataServiceClient::new(&DataServiceConfig::from_env()?)?;
/// let debts = client.get("debts/", &[("user_id", "u1")]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct DataServiceClient {
    client: reqwest::Client,
    base_url: String,
    auth_header: Option<HeaderValue>,
}

impl DataServiceClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns an error if the access token is not a valid header value or
    /// the HTTP client cannot be initialized.
    pub fn new(config: &DataServiceConfig) -> Result<Self, DataServiceError> {
        let auth_header = config.access_token.as_deref().map(bearer).transpose()?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            auth_header,
        })
    }

    /// A client sharing this one's connection pool that authenticates with
    /// `token` instead of the configured access token.
    pub fn with_access_token(&self, token: &str) -> Result<Self, DataServiceError> {
        Ok(Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            auth_header: Some(bearer(token)?),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(auth) = &self.auth_header {
            headers.insert(AUTHORIZATION, auth.clone());
        }
        headers
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("[DataService] {} {}", method, url);
        self.client.request(method, url).headers(self.headers())
    }

    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, DataServiceError> {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::parse_response(response).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, DataServiceError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::parse_response(response).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, DataServiceError> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::parse_response(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), DataServiceError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::parse_response(response).await.map(|_| ())
    }

    /// Any 2xx is success. Empty bodies (such as a 204) read as `Value::Null`.
    async fn parse_response(response: Response) -> Result<Value, DataServiceError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(DataServiceError::Status {
                status,
                message: error_message(status, &body),
            });
        }

        if status == StatusCode::NO_CONTENT || body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|e| {
            DataServiceError::Decode(format!(
                "{} - {}",
                e,
                body.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>()
            ))
        })
    }
}

fn bearer(token: &str) -> Result<HeaderValue, DataServiceError> {
    HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|e| DataServiceError::InvalidConfig(format!("Invalid access token format: {}", e)))
}

/// Prefers the structured `error`, `message` or `detail` field of a JSON
/// error body and falls back to the raw text.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ApiErrorResponse>(body) {
        if let Some(msg) = err.error.or(err.message).or(err.detail) {
            return msg;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {}", status)
    } else {
        trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect()
    }
}

use crate::config::ConsoleConfig;
use crate::error::AdminError;
use crate::models::ApiEnvelope;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use session_store::CredentialProvider;
use std::sync::Arc;
use tracing::debug;

/// HTTP access to the admin API with the operator's bearer token.
///
/// The credential is looked up on every call. When there is none the call
/// fails with [`AdminError::Unauthenticated`] before anything is sent.
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl AuthenticatedClient {
    pub fn new(
        base_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AdminError> {
        // no explicit timeouts: transport defaults apply
        let client = Client::builder().build().map_err(|e| {
            AdminError::NetworkOrParseFailure(format!("Failed to create HTTP client: {}", e))
        })?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(
        config: &ConsoleConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AdminError> {
        Self::new(config.api_base_url.clone(), credentials)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Sends one request and returns the JSON body as-is, whatever the HTTP
    /// status. Interpreting `success` is left to the caller.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, AdminError> {
        let token = self
            .credentials
            .credential()
            .ok_or(AdminError::Unauthenticated)?;

        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            AdminError::NetworkOrParseFailure(format!("HTTP request failed: {}", e))
        })?;
        let status = response.status();

        let text = response.text().await.map_err(|e| {
            AdminError::NetworkOrParseFailure(format!("Failed to read response: {}", e))
        })?;
        debug!("{} {} -> {}", method, path, status);

        serde_json::from_str(&text).map_err(|e| {
            AdminError::NetworkOrParseFailure(format!(
                "Failed to parse response ({}): {}",
                status, e
            ))
        })
    }

    /// [`request`](Self::request) decoded into the standard envelope.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<ApiEnvelope<T>, AdminError> {
        let payload = self.request(method, path, body).await?;
        serde_json::from_value(payload).map_err(|e| {
            AdminError::NetworkOrParseFailure(format!("Unexpected response shape: {}", e))
        })
    }
}

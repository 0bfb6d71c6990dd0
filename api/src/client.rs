//! KinGraph backend API client implementation

use crate::{
    error::ApiError,
    types::{ErrorBody, InfoResponse},
};
use reqwest::Client;

/// Base URL used when `KINGRAPH_API_URL` is not set
///
/// Matches the local development backend port.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client for the KinGraph backend API
///
/// Cheap to clone: the underlying connection pool is shared between clones.
#[derive(Clone, Debug)]
pub struct InfoClient {
    client: Client,
    base_url: String,
}

impl InfoClient {
    /// Create a client with the base URL from the environment
    ///
    /// Reads `KINGRAPH_API_URL`, falling back to [`DEFAULT_BASE_URL`] when
    /// unset. The base URL is resolved once here, not per request.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("KINGRAPH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Create a client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The base URL this client was constructed with
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the backend info payload
    ///
    /// Performs `GET <base>/api/v1/info` and deserializes the JSON body.
    /// Failures are logged before being propagated; they are never swallowed.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Network`] on transport failures (connection, DNS, timeout)
    /// - [`ApiError::Status`] when the server responds with a non-2xx status
    /// - [`ApiError::Parse`] when the body does not match [`InfoResponse`]
    pub async fn info(&self) -> Result<InfoResponse, ApiError> {
        let result = self.fetch_info().await;

        if let Err(error) = &result {
            tracing::error!(error = %error, base_url = %self.base_url, "Failed to fetch info");
        }

        result
    }

    async fn fetch_info(&self) -> Result<InfoResponse, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/v1/info", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<InfoResponse>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            // Prefer a structured { "message": ... } error body when the
            // server provides one; plain-text bodies yield no message.
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message);

            Err(ApiError::Status {
                status: status.as_u16(),
                message,
            })
        }
    }
}

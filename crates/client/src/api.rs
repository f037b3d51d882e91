//! REST client for the telescope daemon HTTP endpoints.
//!
//! Wraps the daemon's directive and status endpoints (`GET
//! /<directive>`, `GET /status`) using [`reqwest`].

use telmon_core::directive::Directive;
use telmon_core::status::StatusPayload;

/// HTTP client for a single telescope daemon.
pub struct TelescopedApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the telescope daemon REST layer.
#[derive(Debug, thiserror::Error)]
pub enum TelApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The daemon returned a non-2xx status code.
    #[error("daemon error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl TelescopedApi {
    /// Create a new API client for a telescope daemon.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://host:8080`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the daemon.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Dispatch a directive to the daemon.
    ///
    /// Sends a `GET /<directive>` request.  The response body is
    /// ignored; a 2xx status is the only success signal.
    pub async fn dispatch(&self, directive: &Directive) -> Result<(), TelApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, directive.path()))
            .send()
            .await?;

        Self::check_status(response).await
    }

    /// Fetch the current telescope status.
    ///
    /// Sends a `GET /status` request and parses the JSON body into a
    /// [`StatusPayload`].
    pub async fn status(&self) -> Result<StatusPayload, TelApiError> {
        let response = self
            .client
            .get(format!("{}/status", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`TelApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, TelApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(TelApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TelApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), TelApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

//! Hugging Face Hub API client for Space secrets.

use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants;
use crate::errors::HubError;

#[derive(Debug, Serialize)]
struct SetSecretRequest<'a> {
    key: &'a str,
    value: &'a str,
}

#[derive(Debug, Deserialize)]
struct HubErrorBody {
    error: String,
}

/// Authenticated client for the Space secrets endpoint of the Hub.
pub struct HubClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl HubClient {
    /// Create a client with its own HTTP connection pool.
    ///
    /// # Arguments
    ///
    /// * `token` - Hugging Face access token sent as a bearer token
    /// * `endpoint` - Hub base URL, e.g. `https://huggingface.co`
    ///
    /// # Returns
    ///
    /// A client ready to call [`HubClient::set_space_secret`].
    ///
    /// # Errors
    ///
    /// Returns `HubError::ClientError` if the HTTP client cannot be built
    /// (for example when no TLS backend is available).
    pub fn new(token: String, endpoint: String) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| HubError::ClientError(e.to_string()))?;

        Ok(Self::with_client(client, token, endpoint))
    }

    /// Create a client around an existing `reqwest::Client`.
    ///
    /// # Arguments
    ///
    /// * `client` - HTTP client to send requests with
    /// * `token` - Hugging Face access token sent as a bearer token
    /// * `endpoint` - Hub base URL; a trailing `/` is dropped
    pub fn with_client(client: Client, token: String, endpoint: String) -> Self {
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn secrets_url(&self, space_id: &str) -> String {
        format!(
            "{}{}",
            self.endpoint,
            constants::api::SPACE_SECRETS_PATH_TEMPLATE.replace("{space_id}", space_id)
        )
    }

    /// Create or update a secret on a Space.
    ///
    /// Existing secrets with the same key are overwritten by the Hub.
    ///
    /// # Arguments
    ///
    /// * `space_id` - Target Space as `owner/name`
    /// * `key` - Secret name
    /// * `value` - Plaintext secret value
    ///
    /// # Errors
    ///
    /// - `HubError::HttpError` if the request cannot be sent
    /// - `HubError::ApiError` for any non-2xx response, carrying the status and
    ///   the Hub's `error` message (or the raw body, or the status reason)
    pub async fn set_space_secret(&self, space_id: &str, key: &str, value: &str) -> Result<()> {
        let url = self.secrets_url(space_id);
        debug!(
            repo_type = constants::space::REPO_TYPE,
            space = space_id,
            key,
            "setting secret"
        );

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&SetSecretRequest { key, value })
            .send()
            .await
            .map_err(HubError::from)?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<HubErrorBody>(&body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string(),
            Err(_) => body,
        };

        Err(HubError::ApiError {
            status_code: status.as_u16(),
            message,
        }
        .into())
    }
}

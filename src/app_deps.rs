//! Dependency seams for the upload flow, so tests can swap out the Hub and stdin.

use anyhow::Result;
use async_trait::async_trait;

use crate::huggingface;

/// Sets secrets on a Space.
#[async_trait]
pub trait SpaceApi: Send + Sync {
    async fn set_secret(&self, space_id: &str, key: &str, value: &str) -> Result<()>;
}

/// Builds a [`SpaceApi`] once the token is known.
pub trait SpaceApiFactory: Send + Sync {
    fn create(&self, token: String, endpoint: String) -> Result<Box<dyn SpaceApi>>;
}

/// [`SpaceApi`] backed by [`huggingface::HubClient`].
pub struct RealSpaceApi {
    inner: huggingface::HubClient,
}

#[async_trait]
impl SpaceApi for RealSpaceApi {
    async fn set_secret(&self, space_id: &str, key: &str, value: &str) -> Result<()> {
        self.inner.set_space_secret(space_id, key, value).await
    }
}

pub struct RealSpaceApiFactory;

impl SpaceApiFactory for RealSpaceApiFactory {
    fn create(&self, token: String, endpoint: String) -> Result<Box<dyn SpaceApi>> {
        let client = huggingface::HubClient::new(token, endpoint)?;
        Ok(Box::new(RealSpaceApi { inner: client }))
    }
}

/// Asks the user for a token when none is in the environment.
pub trait PromptInterface: Send + Sync {
    fn prompt_token(&self) -> Result<String>;
}

/// Reads the token from stdin.
pub struct RealPrompt;

impl PromptInterface for RealPrompt {
    fn prompt_token(&self) -> Result<String> {
        crate::prompt::prompt_token()
    }
}


use crate::error::ProviderError;
use async_trait::async_trait;
use std::time::Duration;

/// Issues GET requests against the provider and hands back the raw body.
///
/// Kept as a trait so the adapter can be exercised without network access.
#[async_trait]
pub trait ProviderTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, ProviderError>;
}

/// reqwest-backed transport. Every request is bounded by the configured
/// timeout; dropping the returned future aborts the request.
pub struct HttpTransport {
    inner: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-backend/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { inner })
    }
}

#[async_trait]
impl ProviderTransport for HttpTransport {
    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        let response = self.inner.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

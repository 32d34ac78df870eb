//! Canned-response transport for tests.

use super::transport::ProviderTransport;
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Mutex;

enum Canned {
    Body(String),
    Status(u16),
}

/// Answers requests whose URL contains a registered substring and records
/// every URL it was asked for. Unmatched URLs fail with a 503.
#[derive(Default)]
pub struct FakeTransport {
    responses: Vec<(String, Canned)>,
    requests: Mutex<Vec<String>>,
}

impl FakeTransport {
    /// A transport where every request fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_response(url_contains: &str, body: &str) -> Self {
        Self::default().and_response(url_contains, body)
    }

    pub fn with_status(url_contains: &str, status: u16) -> Self {
        Self::default().and_status(url_contains, status)
    }

    pub fn and_response(mut self, url_contains: &str, body: &str) -> Self {
        self.responses
            .push((url_contains.to_string(), Canned::Body(body.to_string())));
        self
    }

    pub fn and_status(mut self, url_contains: &str, status: u16) -> Self {
        self.responses
            .push((url_contains.to_string(), Canned::Status(status)));
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProviderTransport for FakeTransport {
    async fn get_text(&self, url: &str) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(url.to_string());

        match self
            .responses
            .iter()
            .find(|(pattern, _)| url.contains(pattern.as_str()))
        {
            Some((_, Canned::Body(body))) => Ok(body.clone()),
            Some((_, Canned::Status(status))) => Err(ProviderError::Status(*status)),
            None => Err(ProviderError::Status(503)),
        }
    }
}

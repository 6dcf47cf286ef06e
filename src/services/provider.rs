// src/services/provider.rs
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking a provider for a completion.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("Request failed with status code {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from {0} API")]
    InvalidResponse(&'static str),
}

// The request URL carries the API key as a query parameter; drop it.
impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.without_url())
    }
}

impl ProviderError {
    /// Short label used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::Request(err) if err.is_timeout() => "timeout",
            ProviderError::Request(_) => "transport",
            ProviderError::Api { status: 429, .. } => "rate_limited",
            ProviderError::Api { status: 401 | 403, .. } => "unauthorized",
            ProviderError::Api { .. } => "api",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// A text-generation backend: send a prompt, get text back.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

// src/state.rs
use std::sync::Arc;

use crate::config::Settings;
use crate::message::CredentialStatus;
use crate::services::gemini::GeminiProvider;
use crate::services::provider::{ChatProvider, ProviderError};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub settings: Settings,
    /// `None` when no credential is configured.
    pub provider: Option<Arc<dyn ChatProvider>>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, ProviderError> {
        let provider = GeminiProvider::from_settings(&settings)?
            .map(|p| Arc::new(p) as Arc<dyn ChatProvider>);
        Ok(Self { settings, provider })
    }

    pub fn with_provider(settings: Settings, provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { settings, provider }
    }

    pub fn credential_status(&self) -> CredentialStatus {
        if self.provider.is_some() {
            CredentialStatus::Configured
        } else {
            CredentialStatus::Missing
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use crate::config::{CredentialSource, RelayConfig};
use crate::translate::{AzureTranslator, TranslatorInterface};

/// Read-only per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<dyn TranslatorInterface>,
    pub credentials: CredentialSource,
}

impl AppState {
    pub fn new(translator: Arc<dyn TranslatorInterface>, credentials: CredentialSource) -> Self {
        Self {
            translator,
            credentials,
        }
    }

    /// Azure-backed state that reads credentials from the environment on each request.
    pub fn from_config(config: &RelayConfig) -> anyhow::Result<Self> {
        let timeout = config.provider_timeout_secs.map(Duration::from_secs);
        let translator = AzureTranslator::with_timeout(timeout)?;

        Ok(Self::new(Arc::new(translator), CredentialSource::Environment))
    }
}

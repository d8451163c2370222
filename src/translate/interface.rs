use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::TranslatorCredentials;
use crate::error::ProviderError;

/// Inbound `/translate` body. Fields left out (or sent as `null`) take their defaults.
///
/// `text` stays untyped so any falsy JSON value can be reported as missing text.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<serde_json::Value>,
    #[serde(default)]
    pub source_language: Option<String>,
    #[serde(default)]
    pub target_language: Option<String>,
    #[serde(default)]
    pub use_strict_mode: Option<bool>,
}

/// Successful `/translate` answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub original_text: String,
    pub translated_text: String,
    pub target_language: String,
    pub strict_mode_applied: bool,
}

/// A translation provider.
///
/// Implementations make exactly one attempt; retrying is left to the caller.
#[async_trait]
pub trait TranslatorInterface: Send + Sync {
    /// Translate `text` into `target`. `source` of `None` asks the provider to detect it.
    async fn translate(
        &self,
        credentials: &TranslatorCredentials,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<String, ProviderError>;
}

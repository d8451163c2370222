use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::interface::TranslatorInterface;
use crate::config::TranslatorCredentials;
use crate::error::ProviderError;

const API_VERSION: &str = "3.0";

#[derive(Debug, Serialize)]
struct TextItem<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslationResult {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// Azure Translator v3 client.
#[derive(Debug, Clone)]
pub struct AzureTranslator {
    client: Client,
}

impl AzureTranslator {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::new(builder.build()?))
    }
}

/// `<endpoint>translate`, adding the separator when the endpoint lacks a trailing slash.
pub fn translate_url(endpoint: &str) -> String {
    if endpoint.ends_with('/') {
        format!("{}translate", endpoint)
    } else {
        format!("{}/translate", endpoint)
    }
}

/// Query string for one call. `from` is only sent when a source language is given.
pub fn query_params<'a>(source: Option<&'a str>, target: &'a str) -> Vec<(&'static str, &'a str)> {
    let mut params = vec![("api-version", API_VERSION), ("to", target)];
    if let Some(source) = source.filter(|s| !s.is_empty()) {
        params.push(("from", source));
    }
    params
}

fn first_translation(body: &str) -> Result<String, ProviderError> {
    let results: Vec<TranslationResult> = serde_json::from_str(body)?;
    let first = results
        .into_iter()
        .next()
        .ok_or(ProviderError::UnexpectedShape("empty result list"))?;
    first
        .translations
        .into_iter()
        .next()
        .map(|t| t.text)
        .ok_or(ProviderError::UnexpectedShape("result has no translations"))
}

#[async_trait]
impl TranslatorInterface for AzureTranslator {
    async fn translate(
        &self,
        credentials: &TranslatorCredentials,
        text: &str,
        source: Option<&str>,
        target: &str,
    ) -> Result<String, ProviderError> {
        let url = translate_url(&credentials.endpoint);
        let params = query_params(source, target);
        info!("Calling translator API with params: {:?}", params);

        let response = self
            .client
            .post(&url)
            .query(&params)
            .header("Ocp-Apim-Subscription-Key", credentials.key.as_str())
            .header("Ocp-Apim-Subscription-Region", credentials.region.as_str())
            .json(&[TextItem { text }])
            .send()
            .await?;

        let status = response.status();
        info!("Response status code: {}", status);
        let body = response.text().await?;
        debug!("Response content: {}", body);

        if !status.is_success() {
            return Err(ProviderError::Status { status, body });
        }

        first_translation(&body)
    }
}

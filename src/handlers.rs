use serde_json::Value;
use tracing::{error, info, warn};

use crate::error::RelayError;
use crate::state::AppState;
use crate::translate::interface::{TranslateRequest, TranslateResponse};
use crate::translate::terminology::enforce_un_terminology;

pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Request fields after defaults have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub text: String,
    pub source_language: String,
    pub target_language: String,
    pub use_strict_mode: bool,
}

/// Pull `text` out of the body. Falsy JSON (`null`, `false`, `0`, `""`, `[]`, `{}`)
/// counts as missing; any other non-string value is a malformed body.
fn request_text(text: Option<Value>) -> Result<String, RelayError> {
    match text {
        Some(Value::String(text)) if !text.is_empty() => Ok(text),
        None | Some(Value::Null) | Some(Value::Bool(false)) | Some(Value::String(_)) => {
            Err(RelayError::MissingText)
        }
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Err(RelayError::MissingText),
        Some(Value::Array(items)) if items.is_empty() => Err(RelayError::MissingText),
        Some(Value::Object(fields)) if fields.is_empty() => Err(RelayError::MissingText),
        Some(other) => {
            warn!("Rejecting non-string text value: {}", other);
            Err(RelayError::InvalidBody)
        }
    }
}

/// Decode and validate a raw `/translate` body.
pub fn parse_request(body: &[u8]) -> Result<ValidatedRequest, RelayError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| {
        warn!("Rejecting malformed request body: {}", e);
        RelayError::InvalidBody
    })?;
    if !value.is_object() {
        warn!("Rejecting request body that is not a JSON object");
        return Err(RelayError::InvalidBody);
    }

    let request: TranslateRequest = serde_json::from_value(value).map_err(|e| {
        warn!("Rejecting request body with mistyped fields: {}", e);
        RelayError::InvalidBody
    })?;

    let text = request_text(request.text)?;

    Ok(ValidatedRequest {
        text,
        source_language: request.source_language.unwrap_or_default(),
        target_language: request
            .target_language
            .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
        use_strict_mode: request.use_strict_mode.unwrap_or(false),
    })
}

/// Run one translation: validate, call the provider once, then enforce terminology if asked.
pub async fn handle_translate(state: &AppState, body: &[u8]) -> Result<TranslateResponse, RelayError> {
    let request = parse_request(body)?;

    let credentials = state.credentials.load().ok_or_else(|| {
        error!("TRANSLATOR_KEY or TRANSLATOR_ENDPOINT is not set");
        RelayError::ConfigurationMissing
    })?;
    info!("Using endpoint: {}", credentials.endpoint);

    let source = Some(request.source_language.as_str()).filter(|s| !s.is_empty());
    let translated = state
        .translator
        .translate(&credentials, &request.text, source, &request.target_language)
        .await
        .map_err(|e| {
            error!("Translation error: {}", e);
            RelayError::from(e)
        })?;

    let translated_text = if request.use_strict_mode {
        enforce_un_terminology(&translated)
    } else {
        translated
    };

    Ok(TranslateResponse {
        original_text: request.text,
        translated_text,
        target_language: request.target_language,
        strict_mode_applied: request.use_strict_mode,
    })
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures talking to the translation provider or reading its answer.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("could not decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unexpected provider response: {0}")]
    UnexpectedShape(&'static str),
}

/// Every way a `/translate` request can end without a translation.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Please provide text to translate")]
    MissingText,

    #[error("Translator configuration missing")]
    ConfigurationMissing,

    #[error("Translation failed: {0}")]
    TranslationFailed(#[from] ProviderError),
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::InvalidBody | RelayError::MissingText => StatusCode::BAD_REQUEST,
            RelayError::ConfigurationMissing | RelayError::TranslationFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(RelayError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::MissingText.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn server_side_errors_map_to_500() {
        assert_eq!(
            RelayError::ConfigurationMissing.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        let failed = RelayError::from(ProviderError::UnexpectedShape("empty result list"));
        assert_eq!(failed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn translation_failure_message_carries_detail() {
        let failed = RelayError::from(ProviderError::Status {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "{\"error\":{\"code\":401000}}".to_string(),
        });
        assert_eq!(
            failed.to_string(),
            "Translation failed: provider returned 401 Unauthorized: {\"error\":{\"code\":401000}}"
        );
    }
}

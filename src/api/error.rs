//! Relay error responses.
//!
//! Every analyze-relay failure still carries a usable fallback
//! candidate so downstream rendering never receives an empty set —
//! the error body is `{error, predictions: [<fallback>]}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::models::DiagnosisCandidate;

/// Error body for the analyze relay. `predictions` is never empty.
#[derive(Debug, Serialize)]
pub struct AnalyzeErrorBody {
    pub error: String,
    pub predictions: Vec<DiagnosisCandidate>,
}

/// Relay-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {message}")]
    BadRequest {
        message: String,
        fallback: DiagnosisCandidate,
    },
    #[error("Classifier credential is not configured")]
    MissingCredential { fallback: DiagnosisCandidate },
    #[error("Classifier unavailable: {detail}")]
    ClassifierUnavailable {
        detail: String,
        fallback: DiagnosisCandidate,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fallback) = match self {
            ApiError::BadRequest { message, fallback } => {
                (StatusCode::BAD_REQUEST, message, fallback)
            }
            ApiError::MissingCredential { fallback } => {
                tracing::error!("classifier credential missing");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "OpenAI API 키가 설정되지 않았습니다".to_string(),
                    fallback,
                )
            }
            ApiError::ClassifierUnavailable { detail, fallback } => {
                tracing::error!(detail, "classifier unavailable");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "AI 분석 서비스에 일시적 문제가 있습니다. 잠시 후 다시 시도하세요.".to_string(),
                    fallback,
                )
            }
        };

        let body = AnalyzeErrorBody {
            error: message,
            predictions: vec![fallback],
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::fallback::fallback_candidate;
    use crate::models::SeverityLevel;

    #[test]
    fn bad_request_maps_to_400() {
        let err = ApiError::BadRequest {
            message: "Invalid request body".into(),
            fallback: fallback_candidate(SeverityLevel::default()),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_credential_maps_to_500() {
        let err = ApiError::MissingCredential {
            fallback: fallback_candidate(SeverityLevel::default()),
        };
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

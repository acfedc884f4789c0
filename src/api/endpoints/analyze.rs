//! `POST /analyze-symptoms` — the classifier relay.
//!
//! Request: `{bodyPart: string, symptoms: string[], severity: number}`.
//! Success: `200 {predictions: [...]}`. Every failure response still
//! carries `predictions: [<fallback>]` so rendering never gets an
//! empty set.
//!
//! Status mapping: malformed request → 400; missing credential,
//! classifier transport failure, or an empty completion → 500; a reply
//! the model produced but we could not parse degrades to `200` with
//! the fallback (the user asked a well-formed question and gets a
//! conservative answer).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::classifier::fallback::fallback_candidate;
use crate::classifier::{ClassifierError, CompletionClient, SymptomClassifier};
use crate::locator::PlacesClient;
use crate::models::{DiagnosisCandidate, SeverityLevel};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub predictions: Vec<DiagnosisCandidate>,
}

/// Validated analyze request. Parsed by hand from a JSON value so a
/// malformed body can still be answered with a fallback candidate
/// instead of a bare extractor rejection.
#[derive(Debug)]
struct AnalyzeRequest {
    body_part: String,
    symptoms: Vec<String>,
    severity: SeverityLevel,
}

fn parse_request(body: &serde_json::Value) -> Result<AnalyzeRequest, ApiError> {
    // Severity first: even an invalid request wants the most accurate
    // fallback urgency we can give it.
    let severity_number = body.get("severity").and_then(|v| v.as_f64());
    let severity = severity_number
        .map(|n| SeverityLevel::new(n.round().clamp(0.0, f64::from(u8::MAX)) as u8))
        .unwrap_or_default();

    let invalid = |message: &str| ApiError::BadRequest {
        message: message.to_string(),
        fallback: fallback_candidate(severity),
    };

    let body_part = body
        .get("bodyPart")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| invalid("Invalid request body: bodyPart"))?
        .to_string();

    let symptoms: Vec<String> = body
        .get("symptoms")
        .and_then(|v| v.as_array())
        .ok_or_else(|| invalid("Invalid request body: symptoms"))?
        .iter()
        .filter_map(|v| v.as_str())
        .map(|s| s.to_string())
        .collect();
    if symptoms.is_empty() {
        return Err(invalid("Invalid request body: symptoms"));
    }

    if severity_number.is_none() {
        return Err(invalid("Invalid request body: severity"));
    }

    Ok(AnalyzeRequest {
        body_part,
        symptoms,
        severity,
    })
}

pub async fn analyze<C: CompletionClient, P: PlacesClient>(
    State(ctx): State<ApiContext<C, P>>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let Json(body) = body.map_err(|e| ApiError::BadRequest {
        message: format!("Invalid request body: {e}"),
        fallback: fallback_candidate(SeverityLevel::default()),
    })?;
    let request = parse_request(&body)?;

    tracing::info!(
        body_part = %request.body_part,
        symptom_count = request.symptoms.len(),
        severity = %request.severity,
        "analyze request"
    );

    match ctx
        .classifier
        .classify(&request.body_part, &request.symptoms, request.severity)
        .await
    {
        Ok(predictions) => Ok(Json(AnalyzeResponse { predictions })),
        Err(ClassifierError::MissingCredential) => Err(ApiError::MissingCredential {
            fallback: fallback_candidate(request.severity),
        }),
        Err(e @ ClassifierError::MalformedResponse(_)) => {
            // The model answered but not in schema — degrade, don't block.
            tracing::warn!(error = %e, "unusable classifier reply, serving fallback");
            Ok(Json(AnalyzeResponse {
                predictions: vec![fallback_candidate(request.severity)],
            }))
        }
        Err(e) => Err(ApiError::ClassifierUnavailable {
            detail: e.to_string(),
            fallback: fallback_candidate(request.severity),
        }),
    }
}

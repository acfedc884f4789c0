//! Symptom Classifier Gateway.
//!
//! Sends the user's body part, symptom list, and severity to an
//! OpenAI-compatible chat-completions endpoint and parses the model's
//! JSON reply into weighted diagnosis candidates.
//!
//! The gateway itself never substitutes the fallback candidate — it
//! returns a typed error so callers can distinguish "used fallback"
//! from "used live data". The wizard and the relay endpoint do the
//! substitution (and log it).

pub mod fallback;
pub mod openai;
pub mod parser;
pub mod prompt;

use std::future::Future;

use thiserror::Error;

use crate::models::{DiagnosisCandidate, SeverityLevel};

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Classifier credential is not configured")]
    MissingCredential,

    #[error("Cannot reach the classifier endpoint: {0}")]
    Connection(String),

    #[error("Classifier endpoint returned error (status {status}): {body}")]
    Endpoint { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Classifier returned no usable content")]
    EmptyCompletion,

    #[error("Malformed classifier response: {0}")]
    MalformedResponse(String),
}

/// Transport seam for the completion endpoint.
///
/// The real implementation is [`openai::OpenAiClient`]; tests inject
/// deterministic doubles.
pub trait CompletionClient: Send + Sync {
    /// Submit a system + user prompt pair and return the raw completion text.
    fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> impl Future<Output = Result<String, ClassifierError>> + Send;
}

/// The classifier contract the wizard session depends on.
pub trait SymptomClassifier: Send + Sync {
    fn classify(
        &self,
        body_part: &str,
        symptoms: &[String],
        severity: SeverityLevel,
    ) -> impl Future<Output = Result<Vec<DiagnosisCandidate>, ClassifierError>> + Send;
}

/// Gateway tying prompt construction, the transport, and response
/// parsing together. One request per analysis action — no retries,
/// no caching, no rate limiting.
pub struct ClassifierGateway<C> {
    client: C,
}

impl<C: CompletionClient> ClassifierGateway<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: CompletionClient> SymptomClassifier for ClassifierGateway<C> {
    async fn classify(
        &self,
        body_part: &str,
        symptoms: &[String],
        severity: SeverityLevel,
    ) -> Result<Vec<DiagnosisCandidate>, ClassifierError> {
        let user_prompt = prompt::build_user_prompt(body_part, symptoms, severity);

        tracing::debug!(body_part, symptom_count = symptoms.len(), severity = %severity, "classifier request");

        let completion = self
            .client
            .complete(prompt::CLASSIFIER_SYSTEM_PROMPT, &user_prompt)
            .await?;

        let predictions = parser::parse_predictions(&completion)?;

        tracing::debug!(candidates = predictions.len(), "classifier response parsed");

        Ok(predictions)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Completion double returning a canned payload (or error) per call.
    pub struct FixedCompletion {
        pub payload: Result<String, ()>,
    }

    impl FixedCompletion {
        pub fn ok(payload: &str) -> Self {
            Self {
                payload: Ok(payload.to_string()),
            }
        }

        pub fn failing() -> Self {
            Self { payload: Err(()) }
        }
    }

    impl CompletionClient for FixedCompletion {
        async fn complete(
            &self,
            _system_prompt: &str,
            _user_prompt: &str,
        ) -> Result<String, ClassifierError> {
            match &self.payload {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(ClassifierError::Endpoint {
                    status: 503,
                    body: "unavailable".into(),
                }),
            }
        }
    }
}

//! Catalog endpoints serving the static reference data.

use axum::extract::Query;
use axum::Json;
use serde::Deserialize;

use crate::data;
use crate::models::{BodyPart, Symptom};

/// `GET /body-parts` — the full body-part catalog.
pub async fn body_parts() -> Json<&'static [BodyPart]> {
    Json(data::BODY_PARTS)
}

#[derive(Deserialize)]
pub struct SymptomQuery {
    /// Restrict to symptoms relevant to this body part.
    #[serde(rename = "bodyPart")]
    pub body_part: Option<String>,
}

/// `GET /symptoms` — the symptom catalog, optionally filtered by
/// `?bodyPart=<id>`.
pub async fn symptoms(Query(query): Query<SymptomQuery>) -> Json<Vec<&'static Symptom>> {
    let symptoms = match &query.body_part {
        Some(part_id) => data::symptoms_for_body_part(part_id),
        None => data::SYMPTOMS.iter().collect(),
    };
    Json(symptoms)
}

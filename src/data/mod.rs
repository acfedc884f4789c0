//! Static reference data: the body-part and symptom catalogs.
//!
//! Pure data, fixed at compile time. The wizard and the catalog API
//! endpoints read from here; nothing writes.

mod body_parts;
mod symptoms;

pub use body_parts::BODY_PARTS;
pub use symptoms::SYMPTOMS;

use crate::models::{BodyPart, Symptom};

/// Look up a body part by its catalog id.
pub fn body_part_by_id(id: &str) -> Option<&'static BodyPart> {
    BODY_PARTS.iter().find(|p| p.id == id)
}

/// Look up a symptom by its catalog id.
pub fn symptom_by_id(id: &str) -> Option<&'static Symptom> {
    SYMPTOMS.iter().find(|s| s.id == id)
}

/// All symptoms relevant to the given body part.
pub fn symptoms_for_body_part(body_part_id: &str) -> Vec<&'static Symptom> {
    SYMPTOMS
        .iter()
        .filter(|s| s.applies_to(body_part_id))
        .collect()
}

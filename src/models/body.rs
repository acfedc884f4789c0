use serde::Serialize;

/// A coarse anatomical region selectable as the wizard entry point.
///
/// The outline `path` is an SVG path string rendered by the client;
/// it is opaque to all logic here. `common_symptoms` is informational
/// only — the authoritative symptom-to-region mapping lives on
/// [`Symptom::body_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BodyPart {
    pub id: &'static str,
    pub name: &'static str,
    pub path: &'static str,
    pub common_symptoms: &'static [&'static str],
}

/// A selectable symptom, tagged with the body regions it applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Symptom {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Option<&'static str>,
    pub body_parts: &'static [&'static str],
}

impl Symptom {
    /// Whether this symptom is relevant to the given body part.
    pub fn applies_to(&self, body_part_id: &str) -> bool {
        self.body_parts.contains(&body_part_id)
    }
}

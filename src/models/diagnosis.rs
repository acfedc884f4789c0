use serde::{Deserialize, Serialize};

/// Triage tier indicating recommended speed of care-seeking.
///
/// Fallback logic may assign `Normal` or `Urgent`, but `Emergency`
/// can only originate from the upstream classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Normal,
    Urgent,
    Emergency,
}

/// One candidate condition produced by the classifier (or its fallback).
///
/// Immutable after creation — a new analysis replaces the whole list.
/// Field names match the relay wire contract verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisCandidate {
    pub name: String,
    /// Probability in [0, 1].
    pub probability: f64,
    pub urgency: Urgency,
    /// Specialist-department names, non-empty, drawn from the closed
    /// department set fixed by the classifier prompt.
    pub specialists: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Urgency::Emergency).unwrap(),
            "\"emergency\""
        );
        let parsed: Urgency = serde_json::from_str("\"urgent\"").unwrap();
        assert_eq!(parsed, Urgency::Urgent);
    }

    #[test]
    fn candidate_round_trips_wire_fields() {
        let json = r#"{
            "name": "긴장성 두통",
            "probability": 0.7,
            "urgency": "normal",
            "specialists": ["신경과", "내과"],
            "description": "스트레스로 인한 두통"
        }"#;
        let c: DiagnosisCandidate = serde_json::from_str(json).unwrap();
        assert_eq!(c.name, "긴장성 두통");
        assert_eq!(c.specialists.len(), 2);
        assert!(c.description.is_some());
    }

    #[test]
    fn candidate_description_is_optional() {
        let json = r#"{"name":"x","probability":0.5,"urgency":"normal","specialists":["내과"]}"#;
        let c: DiagnosisCandidate = serde_json::from_str(json).unwrap();
        assert!(c.description.is_none());
    }
}

use serde::Deserialize;

use super::ClassifierError;
use crate::models::DiagnosisCandidate;

/// Parse the model's completion into diagnosis candidates.
///
/// The model is instructed to answer with bare JSON but routinely wraps
/// it in Markdown code fences, so those are stripped first. Entries that
/// fail to deserialize are skipped rather than failing the whole reply;
/// a reply with no usable entry at all is malformed.
pub fn parse_predictions(completion: &str) -> Result<Vec<DiagnosisCandidate>, ClassifierError> {
    let cleaned = strip_code_fences(completion);
    if cleaned.is_empty() {
        return Err(ClassifierError::EmptyCompletion);
    }

    #[derive(Deserialize)]
    struct Envelope {
        predictions: Vec<serde_json::Value>,
    }

    let envelope: Envelope = serde_json::from_str(&cleaned)
        .map_err(|e| ClassifierError::MalformedResponse(e.to_string()))?;

    let candidates: Vec<DiagnosisCandidate> = envelope
        .predictions
        .iter()
        .filter_map(|v| match serde_json::from_value(v.clone()) {
            Ok(candidate) => Some(candidate),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed prediction entry");
                None
            }
        })
        .filter(|c: &DiagnosisCandidate| !c.specialists.is_empty())
        .collect();

    if candidates.is_empty() {
        return Err(ClassifierError::MalformedResponse(
            "no usable prediction entries".into(),
        ));
    }

    Ok(candidates)
}

/// Remove surrounding Markdown code-fence markup, if any.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    #[test]
    fn parses_bare_json() {
        let reply = r#"{"predictions":[{"name":"급성 위염","probability":0.6,"urgency":"normal","specialists":["소화기내과"]}]}"#;
        let parsed = parse_predictions(reply).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].specialists, vec!["소화기내과"]);
    }

    #[test]
    fn parses_fenced_json() {
        let reply = "```json\n{\"predictions\":[{\"name\":\"편두통\",\"probability\":0.7,\"urgency\":\"urgent\",\"specialists\":[\"신경과\"]}]}\n```";
        let parsed = parse_predictions(reply).unwrap();
        assert_eq!(parsed[0].urgency, Urgency::Urgent);
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_predictions("not json").unwrap_err();
        assert!(matches!(err, ClassifierError::MalformedResponse(_)));
    }

    #[test]
    fn rejects_empty_completion() {
        assert!(matches!(
            parse_predictions("   "),
            Err(ClassifierError::EmptyCompletion)
        ));
        assert!(matches!(
            parse_predictions("```json\n```"),
            Err(ClassifierError::EmptyCompletion)
        ));
    }

    #[test]
    fn skips_malformed_entries_but_keeps_good_ones() {
        let reply = r#"{"predictions":[
            {"bogus": true},
            {"name":"역류성 식도염","probability":0.5,"urgency":"normal","specialists":["소화기내과"]}
        ]}"#;
        let parsed = parse_predictions(reply).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "역류성 식도염");
    }

    #[test]
    fn entry_with_empty_specialists_is_not_usable() {
        let reply = r#"{"predictions":[{"name":"x","probability":0.5,"urgency":"normal","specialists":[]}]}"#;
        assert!(parse_predictions(reply).is_err());
    }
}

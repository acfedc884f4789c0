use crate::models::{DiagnosisCandidate, SeverityLevel, Urgency};

/// Build the fixed, conservative placeholder substituted whenever the
/// classifier cannot produce a usable structured result.
///
/// Urgency is `urgent` for severity >= 8 and `normal` otherwise.
/// This path never assigns `emergency` — only the model may.
pub fn fallback_candidate(severity: SeverityLevel) -> DiagnosisCandidate {
    let urgency = if severity.is_high() {
        Urgency::Urgent
    } else {
        Urgency::Normal
    };

    DiagnosisCandidate {
        name: "분석 불가".to_string(),
        probability: 0.5,
        urgency,
        specialists: vec![super::prompt::GENERAL_DEPARTMENT.to_string()],
        description: Some(
            "시스템 오류로 인해 분석할 수 없습니다. 의료진과 직접 상담하세요.".to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_severity_is_urgent_never_emergency() {
        for s in 8..=10 {
            let candidate = fallback_candidate(SeverityLevel::new(s));
            assert_eq!(candidate.urgency, Urgency::Urgent, "severity {s}");
        }
    }

    #[test]
    fn low_severity_is_normal() {
        for s in 1..8 {
            let candidate = fallback_candidate(SeverityLevel::new(s));
            assert_eq!(candidate.urgency, Urgency::Normal, "severity {s}");
        }
    }

    #[test]
    fn always_points_at_the_general_department() {
        let candidate = fallback_candidate(SeverityLevel::default());
        assert_eq!(candidate.specialists, vec!["내과"]);
        assert!((0.5..=0.6).contains(&candidate.probability));
        assert!(candidate.description.is_some());
    }
}

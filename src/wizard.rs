//! Wizard State Machine.
//!
//! One `WizardSession` per user interaction: body-part selection (1),
//! symptom selection (2), result view (3), hospital search (4). The
//! classifier is injected so sessions are testable with deterministic
//! doubles; the locator runs outside the session and reports back via
//! `set_hospitals` / `report_location_error`.
//!
//! Step-jump policy: backward jumps are always legal, forward jumps
//! only when the target step's invariant holds (step >= 2 needs a body
//! part, step >= 3 needs a diagnosis). One policy, enforced here, for
//! every caller.

use thiserror::Error;

use crate::classifier::{fallback, ClassifierError, SymptomClassifier};
use crate::models::{
    BodyPart, DiagnosisCandidate, GeolocationError, Hospital, SeverityLevel, Symptom,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WizardStep {
    SelectingBodyPart,
    SelectingSymptoms,
    ViewingResult,
    FindingHospital,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            Self::SelectingBodyPart => 1,
            Self::SelectingSymptoms => 2,
            Self::ViewingResult => 3,
            Self::FindingHospital => 4,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::SelectingBodyPart),
            2 => Some(Self::SelectingSymptoms),
            3 => Some(Self::ViewingResult),
            4 => Some(Self::FindingHospital),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("No body part selected")]
    NoBodyPartSelected,

    #[error("No symptoms selected")]
    NoSymptomsSelected,

    #[error("An analysis is already pending for this session")]
    AnalysisPending,

    #[error("Step {} is not reachable: {reason}", .target.number())]
    StepNotReachable {
        target: WizardStep,
        reason: &'static str,
    },
}

/// Where the current diagnosis list came from, so callers can tell a
/// degraded result from a live one.
#[derive(Debug)]
pub enum AnalysisSource {
    Live,
    Fallback(ClassifierError),
}

impl AnalysisSource {
    pub fn used_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// The in-progress user selection and its legal step sequence.
pub struct WizardSession<C> {
    classifier: C,
    step: WizardStep,
    body_part: Option<BodyPart>,
    symptoms: Vec<Symptom>,
    severity: SeverityLevel,
    diagnosis: Option<Vec<DiagnosisCandidate>>,
    hospitals: Vec<Hospital>,
    location_error: Option<GeolocationError>,
    analysis_pending: bool,
}

impl<C: SymptomClassifier> WizardSession<C> {
    pub fn new(classifier: C) -> Self {
        Self {
            classifier,
            step: WizardStep::SelectingBodyPart,
            body_part: None,
            symptoms: Vec::new(),
            severity: SeverityLevel::default(),
            diagnosis: None,
            hospitals: Vec::new(),
            location_error: None,
            analysis_pending: false,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn body_part(&self) -> Option<&BodyPart> {
        self.body_part.as_ref()
    }

    pub fn selected_symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn severity(&self) -> SeverityLevel {
        self.severity
    }

    pub fn diagnosis(&self) -> Option<&[DiagnosisCandidate]> {
        self.diagnosis.as_deref()
    }

    pub fn hospitals(&self) -> &[Hospital] {
        &self.hospitals
    }

    pub fn location_error(&self) -> Option<GeolocationError> {
        self.location_error
    }

    /// Distinct specialist departments across the current diagnosis,
    /// first occurrence wins. This is what feeds the hospital locator.
    pub fn recommended_specialists(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for candidate in self.diagnosis.iter().flatten() {
            for dept in &candidate.specialists {
                if !seen.contains(dept) {
                    seen.push(dept.clone());
                }
            }
        }
        seen
    }

    /// Select a body region. Valid from any state: clears the symptom
    /// set and forces step 2.
    pub fn select_body_part(&mut self, part: BodyPart) {
        self.body_part = Some(part);
        self.symptoms.clear();
        self.step = WizardStep::SelectingSymptoms;
    }

    /// Add the symptom if absent, remove it if present (by id).
    pub fn toggle_symptom(&mut self, symptom: Symptom) {
        match self.symptoms.iter().position(|s| s.id == symptom.id) {
            Some(idx) => {
                self.symptoms.remove(idx);
            }
            None => self.symptoms.push(symptom),
        }
    }

    pub fn set_severity(&mut self, level: u8) {
        self.severity = SeverityLevel::new(level);
    }

    /// Run the classifier over the current selection and advance to the
    /// result step. On classifier failure the fallback candidate is
    /// substituted and the session still advances — degrade, don't
    /// block. Re-entrant triggers while a call is pending are rejected
    /// without touching state.
    pub async fn request_analysis(&mut self) -> Result<AnalysisSource, WizardError> {
        let part = self.body_part.ok_or(WizardError::NoBodyPartSelected)?;
        if self.symptoms.is_empty() {
            return Err(WizardError::NoSymptomsSelected);
        }
        if self.analysis_pending {
            return Err(WizardError::AnalysisPending);
        }

        self.analysis_pending = true;
        let symptom_names: Vec<String> =
            self.symptoms.iter().map(|s| s.name.to_string()).collect();
        let result = self
            .classifier
            .classify(part.name, &symptom_names, self.severity)
            .await;
        self.analysis_pending = false;

        let (candidates, source) = match result {
            Ok(candidates) => (candidates, AnalysisSource::Live),
            Err(e) => {
                tracing::warn!(error = %e, "classifier failed, substituting fallback candidate");
                (
                    vec![fallback::fallback_candidate(self.severity)],
                    AnalysisSource::Fallback(e),
                )
            }
        };

        self.diagnosis = Some(candidates);
        self.step = WizardStep::ViewingResult;
        Ok(source)
    }

    /// Explicit user action from the result view to the hospital search.
    pub fn go_to_hospital_search(&mut self) -> Result<(), WizardError> {
        self.set_step(WizardStep::FindingHospital)
    }

    /// Jump to a step directly. Backward jumps are always legal;
    /// forward jumps are gated on the target step's invariant.
    pub fn set_step(&mut self, target: WizardStep) -> Result<(), WizardError> {
        if target > self.step {
            if target >= WizardStep::SelectingSymptoms && self.body_part.is_none() {
                return Err(WizardError::StepNotReachable {
                    target,
                    reason: "no body part selected",
                });
            }
            if target >= WizardStep::ViewingResult && self.diagnosis.is_none() {
                return Err(WizardError::StepNotReachable {
                    target,
                    reason: "no analysis result",
                });
            }
        }
        self.step = target;
        Ok(())
    }

    /// Replace the hospital list wholesale after a locator run.
    pub fn set_hospitals(&mut self, hospitals: Vec<Hospital>) {
        self.hospitals = hospitals;
        self.location_error = None;
    }

    /// Record a geolocation failure. The locator must not have been
    /// invoked; any stale hospital list is discarded.
    pub fn report_location_error(&mut self, error: GeolocationError) {
        self.location_error = Some(error);
        self.hospitals.clear();
    }

    /// Back to the initial state: step 1, all selections and results
    /// cleared.
    pub fn reset(&mut self) {
        self.step = WizardStep::SelectingBodyPart;
        self.body_part = None;
        self.symptoms.clear();
        self.severity = SeverityLevel::default();
        self.diagnosis = None;
        self.hospitals.clear();
        self.location_error = None;
        self.analysis_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::test_support::FixedCompletion;
    use crate::classifier::ClassifierGateway;
    use crate::data;
    use crate::models::Urgency;

    fn session_with(payload: FixedCompletion) -> WizardSession<ClassifierGateway<FixedCompletion>> {
        WizardSession::new(ClassifierGateway::new(payload))
    }

    fn head() -> BodyPart {
        *data::body_part_by_id("head").unwrap()
    }

    fn headache() -> Symptom {
        *data::symptom_by_id("headache").unwrap()
    }

    #[test]
    fn toggle_symptom_is_its_own_inverse() {
        let mut session = session_with(FixedCompletion::failing());
        session.select_body_part(head());

        session.toggle_symptom(headache());
        assert_eq!(session.selected_symptoms().len(), 1);
        session.toggle_symptom(headache());
        assert!(session.selected_symptoms().is_empty());
    }

    #[test]
    fn select_body_part_clears_symptoms_and_forces_step_two() {
        let mut session = session_with(FixedCompletion::failing());
        session.select_body_part(head());
        session.toggle_symptom(headache());

        let neck = *data::body_part_by_id("neck").unwrap();
        session.select_body_part(neck);

        assert_eq!(session.step(), WizardStep::SelectingSymptoms);
        assert!(session.selected_symptoms().is_empty());
        assert_eq!(session.body_part().unwrap().id, "neck");
    }

    #[tokio::test]
    async fn select_body_part_forces_step_two_even_from_later_steps() {
        let mut session = session_with(FixedCompletion::ok(
            r#"{"predictions":[{"name":"x","probability":0.5,"urgency":"normal","specialists":["내과"]}]}"#,
        ));
        session.select_body_part(head());
        session.toggle_symptom(headache());
        session.request_analysis().await.unwrap();
        assert_eq!(session.step(), WizardStep::ViewingResult);

        session.select_body_part(head());
        assert_eq!(session.step(), WizardStep::SelectingSymptoms);
        assert!(session.selected_symptoms().is_empty());
    }

    #[tokio::test]
    async fn analysis_with_live_payload_matches_it_verbatim() {
        let mut session = session_with(FixedCompletion::ok(
            r#"{"predictions":[{"name":"긴장성 두통","probability":0.7,"urgency":"urgent","specialists":["신경과"],"description":"d"}]}"#,
        ));
        session.select_body_part(head());
        session.toggle_symptom(headache());
        session.set_severity(9);

        let source = session.request_analysis().await.unwrap();

        assert!(!source.used_fallback());
        assert_eq!(session.step(), WizardStep::ViewingResult);
        let diagnosis = session.diagnosis().unwrap();
        assert_eq!(diagnosis.len(), 1);
        assert_eq!(diagnosis[0].name, "긴장성 두통");
        assert!((diagnosis[0].probability - 0.7).abs() < 1e-9);
        assert_eq!(diagnosis[0].urgency, Urgency::Urgent);
    }

    #[tokio::test]
    async fn analysis_failure_still_advances_with_the_fallback() {
        let mut session = session_with(FixedCompletion::failing());
        session.select_body_part(head());
        session.toggle_symptom(headache());
        session.set_severity(9);

        let source = session.request_analysis().await.unwrap();

        assert!(source.used_fallback());
        assert_eq!(session.step(), WizardStep::ViewingResult);
        let diagnosis = session.diagnosis().unwrap();
        assert_eq!(diagnosis.len(), 1);
        assert_eq!(diagnosis[0].specialists, vec!["내과"]);
        assert_eq!(diagnosis[0].urgency, Urgency::Urgent);
    }

    #[tokio::test]
    async fn analysis_requires_a_non_empty_symptom_set() {
        let mut session = session_with(FixedCompletion::failing());
        session.select_body_part(head());

        let err = session.request_analysis().await.unwrap_err();
        assert!(matches!(err, WizardError::NoSymptomsSelected));
        assert_eq!(session.step(), WizardStep::SelectingSymptoms);
        assert!(session.diagnosis().is_none());
    }

    #[test]
    fn forward_jumps_are_gated_backward_jumps_are_free() {
        let mut session = session_with(FixedCompletion::failing());

        // No body part yet: step 2 is unreachable.
        assert!(session.set_step(WizardStep::SelectingSymptoms).is_err());

        session.select_body_part(head());
        // No diagnosis yet: steps 3 and 4 are unreachable.
        assert!(session.set_step(WizardStep::ViewingResult).is_err());
        assert!(session.set_step(WizardStep::FindingHospital).is_err());
        assert!(session.go_to_hospital_search().is_err());

        // Backward is always fine.
        session.set_step(WizardStep::SelectingBodyPart).unwrap();
        assert_eq!(session.step(), WizardStep::SelectingBodyPart);
    }

    #[tokio::test]
    async fn hospital_search_reachable_after_analysis() {
        let mut session = session_with(FixedCompletion::ok(
            r#"{"predictions":[{"name":"x","probability":0.5,"urgency":"normal","specialists":["신경과","내과"]}]}"#,
        ));
        session.select_body_part(head());
        session.toggle_symptom(headache());
        session.request_analysis().await.unwrap();

        session.go_to_hospital_search().unwrap();
        assert_eq!(session.step(), WizardStep::FindingHospital);
        assert_eq!(session.recommended_specialists(), vec!["신경과", "내과"]);
    }

    #[test]
    fn geolocation_denied_leaves_hospitals_empty_with_error_state() {
        let mut session = session_with(FixedCompletion::failing());
        session.report_location_error(GeolocationError::PermissionDenied);

        assert!(session.hospitals().is_empty());
        assert_eq!(
            session.location_error(),
            Some(GeolocationError::PermissionDenied)
        );
    }

    #[tokio::test]
    async fn reset_returns_to_the_initial_state() {
        let mut session = session_with(FixedCompletion::failing());
        session.select_body_part(head());
        session.toggle_symptom(headache());
        session.set_severity(10);
        session.request_analysis().await.unwrap();

        session.reset();

        assert_eq!(session.step(), WizardStep::SelectingBodyPart);
        assert!(session.body_part().is_none());
        assert!(session.selected_symptoms().is_empty());
        assert_eq!(session.severity(), SeverityLevel::default());
        assert!(session.diagnosis().is_none());
    }

    #[test]
    fn step_numbers_round_trip() {
        for n in 1..=4 {
            assert_eq!(WizardStep::from_number(n).unwrap().number(), n);
        }
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(5).is_none());
    }
}

//! Core domain types shared by the wizard, classifier, and locator.

pub mod body;
pub mod diagnosis;
pub mod hospital;
pub mod severity;

pub use body::{BodyPart, Symptom};
pub use diagnosis::{DiagnosisCandidate, Urgency};
pub use hospital::{GeoPoint, GeolocationError, Hospital};
pub use severity::SeverityLevel;

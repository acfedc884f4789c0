//! Specialty inference from places metadata.
//!
//! Which departments a facility actually staffs is not in the places
//! response, so it is inferred from the facility name and category
//! tags. The heuristic is locale-specific and deliberately pluggable —
//! the locator's ranking and filtering never depend on how inference
//! is done.

use crate::classifier::prompt::GENERAL_DEPARTMENT;

/// Strategy seam for deriving departments from place metadata.
pub trait SpecialtyInference: Send + Sync {
    /// Infer departments from the facility name and category tags.
    /// Must return at least one department.
    fn infer(&self, name: &str, tags: &[String]) -> Vec<String>;
}

/// Name-substring heuristic for the Korean locale, with English
/// loanword synonyms. General hospitals get the broad four; anything
/// unrecognized gets the generic department.
#[derive(Debug, Default, Clone, Copy)]
pub struct NameHeuristic;

/// Department → name substrings that indicate it.
static NAME_MARKERS: &[(&str, &[&str])] = &[
    ("정형외과", &["정형외과", "orthopedic"]),
    ("피부과", &["피부과", "dermatology"]),
    ("안과", &["안과", "eye", "ophthalmology"]),
    ("산부인과", &["산부인과", "여성", "gynecology"]),
    ("소아과", &["소아과", "pediatric"]),
    ("이비인후과", &["이비인후과", "otolaryngology"]),
];

/// Names carrying these substrings are treated as general hospitals.
static GENERAL_MARKERS: &[&str] = &["종합병원", "대학병원", "병원"];

static GENERAL_DEPARTMENTS: &[&str] = &["내과", "외과", "정형외과", "신경과"];

impl SpecialtyInference for NameHeuristic {
    fn infer(&self, name: &str, tags: &[String]) -> Vec<String> {
        let lower = name.to_lowercase();
        let mut departments: Vec<String> = Vec::new();

        if GENERAL_MARKERS.iter().any(|m| lower.contains(m)) {
            for dept in GENERAL_DEPARTMENTS {
                departments.push((*dept).to_string());
            }
        }

        for (dept, markers) in NAME_MARKERS {
            if markers.iter().any(|m| lower.contains(m))
                && !departments.iter().any(|d| d == dept)
            {
                departments.push((*dept).to_string());
            }
        }

        if departments.is_empty() {
            if tags.iter().any(|t| t == "hospital") {
                departments.push("내과".to_string());
                departments.push("외과".to_string());
            } else if tags.iter().any(|t| t == "doctor" || t == "health") {
                departments.push(GENERAL_DEPARTMENT.to_string());
            }
        }

        if departments.is_empty() {
            departments.push(GENERAL_DEPARTMENT.to_string());
        }
        departments
    }
}

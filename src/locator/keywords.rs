/// Search radius passed to the places source, in meters.
pub const SEARCH_RADIUS_M: u32 = 10_000;

/// Hospitals farther than this are dropped from results (inclusive
/// boundary — exactly 20.0 km stays in).
pub const MAX_DISTANCE_KM: f64 = 20.0;

/// Closed lookup table: department name → places search keywords.
/// Keep in sync with the classifier's department set.
static SPECIALTY_KEYWORDS: &[(&str, &[&str])] = &[
    ("내과", &["internal medicine", "hospital", "clinic"]),
    ("외과", &["surgery", "surgical", "hospital"]),
    ("정형외과", &["orthopedic", "orthopedics", "hospital"]),
    ("신경과", &["neurology", "neurological", "hospital"]),
    ("소화기내과", &["gastroenterology", "digestive", "hospital"]),
    ("이비인후과", &["ENT", "otolaryngology", "hospital"]),
    ("피부과", &["dermatology", "skin", "clinic"]),
    ("안과", &["ophthalmology", "eye", "clinic"]),
    ("산부인과", &["gynecology", "obstetrics", "womens health"]),
    ("소아과", &["pediatrics", "children", "clinic"]),
    ("심장내과", &["cardiology", "heart", "hospital"]),
    ("호흡기내과", &["pulmonology", "respiratory", "hospital"]),
];

/// Keywords used when no wanted specialty is known.
static DEFAULT_KEYWORDS: &[&str] = &["hospital", "clinic"];

/// Map wanted specialties to a deduplicated keyword list, insertion
/// order preserved. Unknown departments contribute the generic
/// "hospital" keyword.
pub fn search_keywords(specialties: &[String]) -> Vec<&'static str> {
    if specialties.is_empty() {
        return DEFAULT_KEYWORDS.to_vec();
    }

    let mut keywords: Vec<&'static str> = Vec::new();
    for wanted in specialties {
        let mapped = SPECIALTY_KEYWORDS
            .iter()
            .find(|(dept, _)| dept == wanted)
            .map(|(_, kws)| *kws)
            .unwrap_or(&["hospital"]);
        for kw in mapped {
            if !keywords.contains(kw) {
                keywords.push(*kw);
            }
        }
    }
    keywords
}

//! Hospital Locator.
//!
//! Given the user's position and the specialties implied by the
//! diagnosis, fans one places query out per search keyword, merges and
//! deduplicates the results, computes haversine distance, and returns
//! facilities within 20 km sorted nearest-first.
//!
//! Keyword failures never fail the search — a failed keyword logs and
//! contributes an empty set, so even total backend failure degrades
//! to "no hospitals found" rather than an error.

pub mod distance;
pub mod keywords;
pub mod places;
pub mod specialty;

use std::collections::HashSet;
use std::future::Future;

use futures_util::future::join_all;
use thiserror::Error;

use crate::models::{GeoPoint, Hospital};
use specialty::{NameHeuristic, SpecialtyInference};

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("Places credential is not configured")]
    MissingCredential,

    #[error("Cannot reach the places endpoint: {0}")]
    Connection(String),

    #[error("Places endpoint returned error (status {status}): {body}")]
    Endpoint { status: u16, body: String },

    #[error("Places API rejected the query: {0}")]
    Rejected(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Malformed places response: {0}")]
    MalformedResponse(String),
}

/// One facility as reported by the places source, before ranking.
#[derive(Debug, Clone)]
pub struct PlaceSummary {
    /// Source-system place id — the dedup key.
    pub id: String,
    pub name: String,
    pub vicinity: Option<String>,
    /// Missing coordinates drop the place from results.
    pub location: Option<GeoPoint>,
    pub rating: Option<f64>,
    pub open_now: Option<bool>,
    /// Category tags, fed to specialty inference.
    pub tags: Vec<String>,
}

/// Transport seam for the places source. The real implementation is
/// [`places::GooglePlacesClient`]; tests inject doubles.
pub trait PlacesClient: Send + Sync {
    /// One nearby search: fixed radius, facility-type "hospital",
    /// the given keyword, centered on `origin`.
    fn search(
        &self,
        origin: GeoPoint,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<PlaceSummary>, LocatorError>> + Send;
}

/// Address placeholder when the places source omits one.
const UNKNOWN_ADDRESS: &str = "주소 정보 없음";
/// Nearby search does not return phone numbers.
const UNKNOWN_PHONE: &str = "전화번호 확인 필요";

pub struct HospitalLocator<P, S = NameHeuristic> {
    places: P,
    inference: S,
}

impl<P: PlacesClient> HospitalLocator<P> {
    pub fn new(places: P) -> Self {
        Self {
            places,
            inference: NameHeuristic,
        }
    }
}

impl<P: PlacesClient, S: SpecialtyInference> HospitalLocator<P, S> {
    /// Swap the specialty-inference strategy.
    pub fn with_inference(places: P, inference: S) -> Self {
        Self { places, inference }
    }

    /// Find facilities near `origin` matching the wanted specialties.
    pub async fn find_nearby(
        &self,
        origin: GeoPoint,
        wanted_specialties: &[String],
    ) -> Result<Vec<Hospital>, LocatorError> {
        let keywords = keywords::search_keywords(wanted_specialties);
        tracing::debug!(?keywords, "hospital search fan-out");

        let queries = keywords
            .iter()
            .map(|kw| async move { (*kw, self.places.search(origin, kw).await) });
        let outcomes = join_all(queries).await;

        let mut merged: Vec<PlaceSummary> = Vec::new();
        for (keyword, outcome) in outcomes {
            match outcome {
                Ok(found) => merged.extend(found),
                Err(e) => {
                    tracing::warn!(keyword, error = %e, "keyword search failed, continuing");
                }
            }
        }

        let mut seen: HashSet<String> = HashSet::new();
        let mut hospitals: Vec<Hospital> = Vec::new();
        for place in merged {
            if !seen.insert(place.id.clone()) {
                continue; // first occurrence wins
            }
            let Some(location) = place.location else {
                continue;
            };

            let distance = distance::haversine_km(origin, location);
            if distance > keywords::MAX_DISTANCE_KM {
                continue;
            }

            hospitals.push(Hospital {
                specialists: self.inference.infer(&place.name, &place.tags),
                id: place.id,
                name: place.name,
                address: place.vicinity.unwrap_or_else(|| UNKNOWN_ADDRESS.to_string()),
                phone: UNKNOWN_PHONE.to_string(),
                location,
                distance,
                is_open: place.open_now.unwrap_or(true),
                rating: place.rating,
            });
        }

        hospitals.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::info!(count = hospitals.len(), "hospital search finished");
        Ok(hospitals)
    }
}

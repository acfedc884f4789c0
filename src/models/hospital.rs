use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A geographic coordinate (WGS84 degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A nearby medical facility returned by the hospital locator.
///
/// Created fresh per search; the result list is replaced wholesale on
/// each query, never incrementally merged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    /// Source-system place identifier — also the dedup key.
    pub id: String,
    pub name: String,
    pub address: String,
    /// May be a locale placeholder when the places source omits it.
    pub phone: String,
    /// Specialist departments inferred heuristically from the place
    /// name and category tags.
    pub specialists: Vec<String>,
    pub location: GeoPoint,
    /// Great-circle distance from the user in km, one-decimal rounding.
    pub distance: f64,
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

/// Why a browser-provided position could not be obtained.
///
/// Geolocation acquisition happens on the client; this is the taxonomy
/// the client reports so the locator is never invoked without a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationError {
    #[error("Location permission was denied")]
    PermissionDenied,
    #[error("Position is unavailable")]
    Unavailable,
    #[error("Position request timed out")]
    Timeout,
    #[error("Geolocation is not supported by this client")]
    Unsupported,
}

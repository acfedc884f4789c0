use serde::Deserialize;

use super::{keywords, LocatorError, PlaceSummary, PlacesClient};
use crate::models::GeoPoint;

/// HTTP client for the Google Places Nearby Search endpoint.
///
/// One GET per keyword: fixed 10 km radius, `type=hospital`,
/// server-held key. As with the classifier, a missing key keeps the
/// client constructable and turns every call into a typed error.
pub struct GooglePlacesClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl GooglePlacesClient {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }

    pub fn google(api_key: Option<String>) -> Self {
        Self::new("https://maps.googleapis.com", api_key)
    }
}

/// Response body from /maps/api/place/nearbysearch/json
#[derive(Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<PlaceResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct PlaceResult {
    place_id: Option<String>,
    name: Option<String>,
    vicinity: Option<String>,
    geometry: Option<Geometry>,
    rating: Option<f64>,
    opening_hours: Option<OpeningHours>,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Deserialize)]
struct Geometry {
    location: Option<LatLng>,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
}

impl PlacesClient for GooglePlacesClient {
    async fn search(
        &self,
        origin: GeoPoint,
        keyword: &str,
    ) -> Result<Vec<PlaceSummary>, LocatorError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LocatorError::MissingCredential)?;

        let url = format!("{}/maps/api/place/nearbysearch/json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("location", format!("{},{}", origin.lat, origin.lng)),
                ("radius", keywords::SEARCH_RADIUS_M.to_string()),
                ("type", "hospital".to_string()),
                ("keyword", keyword.to_string()),
                ("key", api_key.to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    LocatorError::Connection(self.base_url.clone())
                } else if e.is_timeout() {
                    LocatorError::HttpClient("request timed out".into())
                } else {
                    LocatorError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LocatorError::Endpoint {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| LocatorError::MalformedResponse(e.to_string()))?;

        match parsed.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => {
                return Err(LocatorError::Rejected(format!(
                    "{other}: {}",
                    parsed.error_message.unwrap_or_default()
                )));
            }
        }

        Ok(parsed.results.into_iter().filter_map(to_summary).collect())
    }
}

/// Convert one raw result; entries without a place id are unusable.
fn to_summary(result: PlaceResult) -> Option<PlaceSummary> {
    let id = result.place_id?;
    Some(PlaceSummary {
        id,
        name: result.name.unwrap_or_else(|| "알 수 없는 병원".to_string()),
        vicinity: result.vicinity,
        location: result
            .geometry
            .and_then(|g| g.location)
            .map(|l| GeoPoint { lat: l.lat, lng: l.lng }),
        rating: result.rating,
        open_now: result.opening_hours.and_then(|h| h.open_now),
        tags: result.types,
    })
}

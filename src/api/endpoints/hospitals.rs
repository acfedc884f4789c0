//! `POST /hospitals/nearby` — the places relay.
//!
//! Request: `{lat, lng, specialists: string[]}`. The response is
//! always `200` with a hospital list. Keyword failures degrade inside
//! the locator to an empty contribution; should the search itself ever
//! fail, the response is still `200` with an empty list plus an
//! `error` message, matching the degrade-don't-block policy of the
//! rest of the flow.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::types::ApiContext;
use crate::classifier::CompletionClient;
use crate::locator::PlacesClient;
use crate::models::{GeoPoint, Hospital};

#[derive(Deserialize)]
pub struct NearbyRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub specialists: Vec<String>,
}

#[derive(Serialize)]
pub struct NearbyResponse {
    pub hospitals: Vec<Hospital>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn nearby<C: CompletionClient, P: PlacesClient>(
    State(ctx): State<ApiContext<C, P>>,
    Json(request): Json<NearbyRequest>,
) -> Json<NearbyResponse> {
    let origin = GeoPoint {
        lat: request.lat,
        lng: request.lng,
    };

    tracing::info!(
        lat = origin.lat,
        lng = origin.lng,
        specialists = ?request.specialists,
        "hospital search request"
    );

    match ctx.locator.find_nearby(origin, &request.specialists).await {
        Ok(hospitals) => Json(NearbyResponse {
            hospitals,
            error: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "hospital search failed");
            Json(NearbyResponse {
                hospitals: Vec::new(),
                error: Some("병원 검색 중 오류가 발생했습니다.".to_string()),
            })
        }
    }
}

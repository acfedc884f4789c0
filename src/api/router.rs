//! Relay router.
//!
//! Returns a composable `Router` mounting the relay endpoints at the
//! root. Every route carries permissive CORS; pre-flight `OPTIONS`
//! requests are answered `200` with no body.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::classifier::CompletionClient;
use crate::locator::PlacesClient;

/// Build the relay router over the given context.
pub fn relay_router<C, P>(ctx: ApiContext<C, P>) -> Router
where
    C: CompletionClient + 'static,
    P: PlacesClient + 'static,
{
    Router::new()
        .route("/analyze-symptoms", post(endpoints::analyze::analyze::<C, P>))
        .route("/hospitals/nearby", post(endpoints::hospitals::nearby::<C, P>))
        .route("/body-parts", get(endpoints::catalog::body_parts))
        .route("/symptoms", get(endpoints::catalog::symptoms))
        .route("/health", get(endpoints::health::check))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}

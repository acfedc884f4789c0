//! Relay server lifecycle: bind → build router → serve until shutdown.
//!
//! Missing backend credentials are a warning, not a startup failure —
//! the relay still answers, degraded to the fallback candidate, so the
//! client is never left without guidance.

use crate::api::router::relay_router;
use crate::api::types::ApiContext;
use crate::classifier::openai::OpenAiClient;
use crate::classifier::ClassifierGateway;
use crate::config::Settings;
use crate::locator::places::GooglePlacesClient;
use crate::locator::HospitalLocator;

/// Run the relay server until a shutdown signal arrives.
pub async fn serve(settings: Settings) -> Result<(), String> {
    if settings.openai_api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY not set — analysis will degrade to the fallback candidate");
    }
    if settings.places_api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY not set — hospital search will report errors");
    }

    let classifier = ClassifierGateway::new(OpenAiClient::openai(
        settings.openai_api_key.clone(),
        &settings.model,
    ));
    let locator = HospitalLocator::new(GooglePlacesClient::google(
        settings.places_api_key.clone(),
    ));
    let app = relay_router(ApiContext::new(classifier, locator));

    let listener = tokio::net::TcpListener::bind(settings.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind relay server on {}: {e}", settings.bind_addr))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%addr, model = %settings.model, "relay server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Relay server error: {e}"))?;

    tracing::info!("relay server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Cannot listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("shutdown signal received");
}

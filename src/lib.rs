//! Careguide — backend core of a consumer symptom checker.
//!
//! The flow is a four-step wizard: pick a body region, pick symptoms
//! and a severity, review AI-suggested candidate conditions, then find
//! nearby hospitals matching the recommended departments. This crate
//! provides the wizard state machine, the symptom classifier gateway
//! (with its conservative fallback), the hospital locator, and the
//! HTTP relay the web client calls.

pub mod api;
pub mod classifier;
pub mod config;
pub mod data;
pub mod locator;
pub mod models;
pub mod wizard;

use tracing_subscriber::EnvFilter;

/// Initialize tracing from RUST_LOG, falling back to the app default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}

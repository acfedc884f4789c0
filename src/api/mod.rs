//! HTTP relay layer.
//!
//! The web client never holds credentials; it calls these same-origin
//! endpoints and the server talks to the classifier and places
//! backends. All routes answer with permissive CORS and the analyze
//! relay guarantees a usable fallback candidate in every error
//! response.
//!
//! The router is composable — `relay_router()` returns a `Router`
//! that can be mounted on any axum server instance.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::relay_router;
pub use types::ApiContext;

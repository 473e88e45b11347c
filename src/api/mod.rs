//! API endpoints
//!
//! This module contains the HTTP endpoints of the service.

pub mod geocoding;
pub mod health;
pub mod trips;

use axum::Router;
use crate::state::AppState;

/// Assemble the public API router
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/trips", trips::create_trip_router())
        .nest("/api/geocoding", geocoding::create_geocoding_router())
        .nest("/api", health::create_health_router())
}

//! Reverse geocoding endpoint
//!
//! Best-effort place labels for map-picked coordinates. A provider failure
//! is not an error here; the service falls back to a coordinate string.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::geocoding_dto::{ReverseGeocodeQuery, ReverseGeocodeResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_coordinates;

pub fn create_geocoding_router() -> Router<AppState> {
    Router::new().route("/reverse", get(reverse_geocode))
}

async fn reverse_geocode(
    State(state): State<AppState>,
    Query(query): Query<ReverseGeocodeQuery>,
) -> Result<Json<ReverseGeocodeResponse>, AppError> {
    validate_coordinates(query.lat, query.lon).map_err(|_| {
        AppError::BadRequest(format!(
            "Coordinates out of range: ({}, {})",
            query.lat, query.lon
        ))
    })?;

    let label = state.geocoding.reverse_label(query.lat, query.lon).await;

    Ok(Json(ReverseGeocodeResponse {
        label,
        latitude: query.lat,
        longitude: query.lon,
    }))
}

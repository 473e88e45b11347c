//! Trip planning endpoint
//!
//! Validates the trip submission, forwards it to the route-computation
//! backend and attaches the derived duty log and compliance summary.

use axum::{extract::State, routing::post, Json, Router};
use validator::Validate;

use crate::dto::trip_dto::{DutyLogEntry, TripPlanResponse, TripRequest};
use crate::services::eld_service::{build_duty_log, ComplianceEvaluator};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate_trip))
}

async fn calculate_trip(
    State(state): State<AppState>,
    Json(request): Json<TripRequest>,
) -> Result<Json<TripPlanResponse>, AppError> {
    request.validate()?;

    let result = state.route_client.calculate_route(&request).await?;
    result.validate()?;

    let duty_log: Vec<DutyLogEntry> = build_duty_log(&result.stops)
        .iter()
        .map(DutyLogEntry::from)
        .collect();
    let compliance = ComplianceEvaluator::new(state.hos_rules).evaluate(&result);

    log::info!(
        "✅ Derived duty log with {} entries (driving {:.1} h, on duty {:.1} h, rest {:.1} h)",
        duty_log.len(),
        compliance.total_driving_hours,
        compliance.total_on_duty_hours,
        compliance.rest_hours
    );

    Ok(Json(TripPlanResponse {
        route: result.route,
        stops: result.stops,
        fuel_stops: result.fuel_stops,
        duty_log,
        compliance,
    }))
}

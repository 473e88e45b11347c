//! ELD duty log derivation and HOS compliance evaluation
//!
//! Pure functions over an already-computed `RouteResult`. Each recognized
//! stop maps to exactly one duty event; the assembled log is stable-sorted
//! by timestamp; the evaluator compares aggregate hours against the
//! configured `HosRules` thresholds.

use crate::models::duty::{ComplianceSummary, DutyEvent, HosRules};
use crate::models::route::{RouteResult, Stop, StopType};

/// Map one stop to one duty event.
///
/// Unrecognized stop types produce no event. They are logged rather than
/// silently dropped so a missing entry in the rendered log can be traced.
pub fn map_stop(stop: &Stop) -> Option<DutyEvent> {
    let timestamp = stop.time;
    let location = stop.location.address.clone();

    match stop.stop_type {
        StopType::Pickup => Some(DutyEvent::Pickup {
            timestamp,
            location,
            notes: format!("Pickup: {}", stop.description),
        }),
        StopType::Dropoff => Some(DutyEvent::Dropoff {
            timestamp,
            location,
            notes: format!("Dropoff: {}", stop.description),
        }),
        StopType::Rest => Some(DutyEvent::Rest {
            timestamp,
            location,
            duration_hours: stop.duration,
            notes: format!("Mandatory rest: {}", stop.description),
        }),
        StopType::Fuel => Some(DutyEvent::Fuel {
            timestamp,
            location,
            duration_hours: stop.duration,
            notes: format!("Fuel stop: {}", stop.description),
        }),
        StopType::Unknown => {
            log::warn!(
                "⚠️ Skipping stop with unrecognized type at '{}': {}",
                stop.location.address,
                stop.description
            );
            None
        }
    }
}

/// Derive the chronological duty log for a stop list.
///
/// The sort is stable: stops sharing a timestamp keep their input order.
pub fn build_duty_log(stops: &[Stop]) -> Vec<DutyEvent> {
    let mut duty_log: Vec<DutyEvent> = stops.iter().filter_map(map_stop).collect();
    duty_log.sort_by_key(|event| event.timestamp());
    duty_log
}

/// Evaluates aggregate hours against HOS thresholds
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEvaluator {
    rules: HosRules,
}

impl ComplianceEvaluator {
    pub fn new(rules: HosRules) -> Self {
        Self { rules }
    }

    /// Compute the compliance summary for a route result.
    ///
    /// Total function: never errors, produces only aggregates and booleans.
    /// Driving time accounting is delegated to the backend's duration
    /// figure. Boundaries are inclusive: exactly at a limit is compliant.
    pub fn evaluate(&self, result: &RouteResult) -> ComplianceSummary {
        let fuel_hours = sum_durations(result, StopType::Fuel);
        let rest_hours = sum_durations(result, StopType::Rest);

        let total_driving_hours = result.route.duration;
        let total_on_duty_hours = total_driving_hours + fuel_hours;

        ComplianceSummary {
            total_driving_hours,
            total_on_duty_hours,
            rest_hours,
            is_driving_compliant: total_driving_hours <= self.rules.driving_limit,
            is_on_duty_compliant: total_on_duty_hours <= self.rules.on_duty_limit,
            has_adequate_rest: rest_hours >= self.rules.restart_period,
        }
    }
}

/// Sum stop durations of one type across both stop lists. In practice the
/// backend keeps fuel stops only in `fuel_stops`, but the aggregation does
/// not depend on which list a stop arrived in.
fn sum_durations(result: &RouteResult, stop_type: StopType) -> f64 {
    result
        .stops
        .iter()
        .chain(result.fuel_stops.iter())
        .filter(|stop| stop.stop_type == stop_type)
        .map(|stop| stop.duration)
        .sum()
}

//! Route computation result model
//!
//! Shapes returned by the external route-computation backend. These are
//! read-only inputs; the duty log and compliance summary are derived from
//! them fresh on every request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_coordinates;

/// Stop kind along the computed route - closed set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StopType {
    Pickup,
    Dropoff,
    Rest,
    Fuel,
    /// Stop kinds this version does not understand. They are skipped with a
    /// warning during duty-log derivation instead of failing the request.
    #[serde(other)]
    Unknown,
}

/// Address plus `[longitude, latitude]` pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StopLocation {
    pub address: String,
    pub coordinates: [f64; 2],
}

/// Scheduled stop along the route (pickup, dropoff, mandatory rest or fuel)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stop {
    #[serde(rename = "type")]
    pub stop_type: StopType,
    pub location: StopLocation,
    pub time: DateTime<Utc>,
    /// Hours spent at the stop; 0 for point events
    pub duration: f64,
    pub description: String,
}

/// Route geometry and totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteData {
    /// Miles
    pub distance: f64,
    /// Hours of driving
    pub duration: f64,
    /// `[longitude, latitude]` pairs; may be empty
    pub coordinates: Vec<[f64; 2]>,
}

/// Complete response of the route-computation backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResult {
    pub route: RouteData,
    pub stops: Vec<Stop>,
    /// Fuel stops are tracked separately from `stops`: they are
    /// on-duty-not-driving time, not rest
    #[serde(default)]
    pub fuel_stops: Vec<Stop>,
}

impl RouteResult {
    /// Boundary check on backend data before any derivation runs.
    ///
    /// The upstream service owns these numbers; we refuse to build a duty
    /// log from values that cannot be valid (negative or non-finite hours,
    /// coordinates off the globe).
    pub fn validate(&self) -> AppResult<()> {
        check_hours("route.distance", self.route.distance)?;
        check_hours("route.duration", self.route.duration)?;

        for &[lon, lat] in &self.route.coordinates {
            check_point("route.coordinates", lat, lon)?;
        }

        for stop in self.stops.iter().chain(self.fuel_stops.iter()) {
            check_hours(
                &format!("duration of stop at '{}'", stop.location.address),
                stop.duration,
            )?;
            let [lon, lat] = stop.location.coordinates;
            check_point(&format!("stop at '{}'", stop.location.address), lat, lon)?;
        }

        Ok(())
    }
}

fn check_hours(field: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::UpstreamData(format!(
            "{} must be a non-negative finite number, got {}",
            field, value
        )));
    }
    Ok(())
}

fn check_point(field: &str, lat: f64, lon: f64) -> AppResult<()> {
    validate_coordinates(lat, lon).map_err(|_| {
        AppError::UpstreamData(format!(
            "{} has coordinates out of range: ({}, {})",
            field, lat, lon
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_result() -> serde_json::Value {
        json!({
            "route": {
                "distance": 487.3,
                "duration": 8.1,
                "coordinates": [[-87.6298, 41.8781], [-86.1581, 39.7684]]
            },
            "stops": [
                {
                    "type": "pickup",
                    "location": { "address": "Chicago, IL", "coordinates": [-87.6298, 41.8781] },
                    "time": "2024-03-01T08:00:00Z",
                    "duration": 1.0,
                    "description": "Load cargo"
                },
                {
                    "type": "dropoff",
                    "location": { "address": "Indianapolis, IN", "coordinates": [-86.1581, 39.7684] },
                    "time": "2024-03-01T17:00:00Z",
                    "duration": 0.0,
                    "description": "Unload cargo"
                }
            ],
            "fuel_stops": [
                {
                    "type": "fuel",
                    "location": { "address": "Lafayette, IN", "coordinates": [-86.8753, 40.4167] },
                    "time": "2024-03-01T12:00:00Z",
                    "duration": 0.5,
                    "description": "Refuel"
                }
            ]
        })
    }

    #[test]
    fn test_deserialize_route_result() {
        let result: RouteResult = serde_json::from_value(sample_result()).unwrap();
        assert_eq!(result.stops.len(), 2);
        assert_eq!(result.fuel_stops.len(), 1);
        assert_eq!(result.stops[0].stop_type, StopType::Pickup);
        assert_eq!(result.fuel_stops[0].stop_type, StopType::Fuel);
        assert!(result.validate().is_ok());
    }

    #[test]
    fn test_unrecognized_stop_type_deserializes_to_unknown() {
        let mut value = sample_result();
        value["stops"][0]["type"] = json!("layover");
        let result: RouteResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.stops[0].stop_type, StopType::Unknown);
    }

    #[test]
    fn test_missing_fuel_stops_defaults_to_empty() {
        let mut value = sample_result();
        value.as_object_mut().unwrap().remove("fuel_stops");
        let result: RouteResult = serde_json::from_value(value).unwrap();
        assert!(result.fuel_stops.is_empty());
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        let mut result: RouteResult = serde_json::from_value(sample_result()).unwrap();
        result.stops[0].duration = -1.0;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite_route_duration() {
        let mut result: RouteResult = serde_json::from_value(sample_result()).unwrap();
        result.route.duration = f64::NAN;
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_stop_coordinates() {
        let mut result: RouteResult = serde_json::from_value(sample_result()).unwrap();
        result.fuel_stops[0].location.coordinates = [-200.0, 40.0];
        assert!(result.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_empty_geometry() {
        let mut result: RouteResult = serde_json::from_value(sample_result()).unwrap();
        result.route.coordinates.clear();
        assert!(result.validate().is_ok());
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::duty::{ComplianceSummary, DutyEvent, DutyStatus};
use crate::models::route::{RouteData, Stop};

// Trip submission, forwarded as-is to the route-computation backend
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TripRequest {
    #[validate(length(min = 3, max = 200), custom = "crate::utils::validation::validate_not_blank")]
    pub current_location: String,

    #[validate(length(min = 3, max = 200), custom = "crate::utils::validation::validate_not_blank")]
    pub pickup_location: String,

    #[validate(length(min = 3, max = 200), custom = "crate::utils::validation::validate_not_blank")]
    pub dropoff_location: String,

    /// Hours already used in the current duty cycle (up to 14 days)
    #[validate(range(min = 0.0, max = 336.0))]
    pub cycle_used: f64,
}

// One rendered duty-log row; `duration` is omitted for point events
#[derive(Debug, Clone, Serialize)]
pub struct DutyLogEntry {
    pub timestamp: DateTime<Utc>,
    pub event: DutyStatus,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub notes: String,
}

impl From<&DutyEvent> for DutyLogEntry {
    fn from(event: &DutyEvent) -> Self {
        Self {
            timestamp: event.timestamp(),
            event: event.duty_status(),
            location: event.location().to_string(),
            duration: event.duration_hours(),
            notes: event.notes().to_string(),
        }
    }
}

// Full response for the UI: the backend's route data plus the derived
// duty log and compliance summary
#[derive(Debug, Serialize)]
pub struct TripPlanResponse {
    pub route: RouteData,
    pub stops: Vec<Stop>,
    pub fuel_stops: Vec<Stop>,
    pub duty_log: Vec<DutyLogEntry>,
    pub compliance: ComplianceSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_trip_request_validation() {
        let valid = TripRequest {
            current_location: "Chicago, IL".to_string(),
            pickup_location: "Joliet, IL".to_string(),
            dropoff_location: "Dallas, TX".to_string(),
            cycle_used: 20.0,
        };
        assert!(valid.validate().is_ok());

        let blank_location = TripRequest {
            current_location: "    ".to_string(),
            ..valid.clone()
        };
        assert!(blank_location.validate().is_err());

        let short_location = TripRequest {
            pickup_location: "IL".to_string(),
            ..valid.clone()
        };
        assert!(short_location.validate().is_err());

        let cycle_out_of_range = TripRequest {
            cycle_used: 400.0,
            ..valid.clone()
        };
        assert!(cycle_out_of_range.validate().is_err());

        let negative_cycle = TripRequest {
            cycle_used: -1.0,
            ..valid
        };
        assert!(negative_cycle.validate().is_err());
    }

    #[test]
    fn test_duty_log_entry_omits_missing_duration() {
        let event = DutyEvent::Pickup {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
            location: "Chicago, IL".to_string(),
            notes: "Pickup: Load cargo".to_string(),
        };
        let entry = DutyLogEntry::from(&event);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["event"], "ON_DUTY");
        assert!(json.get("duration").is_none());
        assert_eq!(json["notes"], "Pickup: Load cargo");
    }

    #[test]
    fn test_duty_log_entry_carries_interval_duration() {
        let event = DutyEvent::Rest {
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 20, 0, 0).unwrap(),
            location: "Effingham, IL".to_string(),
            duration_hours: 10.0,
            notes: "Mandatory rest: 10-hour restart".to_string(),
        };
        let entry = DutyLogEntry::from(&event);
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["event"], "OFF_DUTY");
        assert_eq!(json["duration"], 10.0);
    }
}

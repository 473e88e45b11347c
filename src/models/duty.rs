//! Duty log model
//!
//! Derived ELD entities: duty events, HOS rule thresholds and the
//! compliance summary. Nothing here is persisted; everything is rebuilt
//! from a `RouteResult` on each request.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// FMCSA duty status buckets used on the rendered log
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
    OnDutyNotDriving,
}

/// One derived duty event, one variant per stop kind.
///
/// Point events (pickup, dropoff) carry no duration; interval events
/// (rest, fuel) always do, so the distinction is enforced by the type
/// instead of a nullable field.
#[derive(Debug, Clone, PartialEq)]
pub enum DutyEvent {
    Pickup {
        timestamp: DateTime<Utc>,
        location: String,
        notes: String,
    },
    Dropoff {
        timestamp: DateTime<Utc>,
        location: String,
        notes: String,
    },
    Rest {
        timestamp: DateTime<Utc>,
        location: String,
        duration_hours: f64,
        notes: String,
    },
    Fuel {
        timestamp: DateTime<Utc>,
        location: String,
        duration_hours: f64,
        notes: String,
    },
}

impl DutyEvent {
    pub fn duty_status(&self) -> DutyStatus {
        match self {
            DutyEvent::Pickup { .. } => DutyStatus::OnDuty,
            DutyEvent::Dropoff { .. } | DutyEvent::Rest { .. } => DutyStatus::OffDuty,
            DutyEvent::Fuel { .. } => DutyStatus::OnDutyNotDriving,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DutyEvent::Pickup { timestamp, .. }
            | DutyEvent::Dropoff { timestamp, .. }
            | DutyEvent::Rest { timestamp, .. }
            | DutyEvent::Fuel { timestamp, .. } => *timestamp,
        }
    }

    pub fn location(&self) -> &str {
        match self {
            DutyEvent::Pickup { location, .. }
            | DutyEvent::Dropoff { location, .. }
            | DutyEvent::Rest { location, .. }
            | DutyEvent::Fuel { location, .. } => location,
        }
    }

    /// Hours at the stop; `None` for point events
    pub fn duration_hours(&self) -> Option<f64> {
        match self {
            DutyEvent::Rest { duration_hours, .. } | DutyEvent::Fuel { duration_hours, .. } => {
                Some(*duration_hours)
            }
            DutyEvent::Pickup { .. } | DutyEvent::Dropoff { .. } => None,
        }
    }

    pub fn notes(&self) -> &str {
        match self {
            DutyEvent::Pickup { notes, .. }
            | DutyEvent::Dropoff { notes, .. }
            | DutyEvent::Rest { notes, .. }
            | DutyEvent::Fuel { notes, .. } => notes,
        }
    }
}

/// HOS rule thresholds, in hours.
///
/// Kept as injectable configuration so tests and future rule revisions can
/// substitute values without touching the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct HosRules {
    /// Maximum driving hours per shift
    pub driving_limit: f64,
    /// Maximum on-duty window per shift
    pub on_duty_limit: f64,
    /// Minimum consecutive off-duty hours to reset the clock
    pub restart_period: f64,
    /// Maximum on-duty hours in 7 days
    pub weekly_limit: f64,
    /// Maximum on-duty hours in 8 days
    pub eight_day_limit: f64,
}

impl Default for HosRules {
    fn default() -> Self {
        Self {
            driving_limit: 11.0,
            on_duty_limit: 14.0,
            restart_period: 10.0,
            weekly_limit: 60.0,
            eight_day_limit: 70.0,
        }
    }
}

/// Aggregated hours and pass/fail flags for the three shift-level rules
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComplianceSummary {
    pub total_driving_hours: f64,
    pub total_on_duty_hours: f64,
    pub rest_hours: f64,
    pub is_driving_compliant: bool,
    pub is_on_duty_compliant: bool,
    pub has_adequate_rest: bool,
}

//! Reverse geocoding service
//!
//! Turns a coordinate pair into a short place label ("City, ST") using a
//! Nominatim-style provider. Display-only and best effort: every failure
//! degrades to a coordinate string, never to an error.

use anyhow::Result;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

lazy_static! {
    /// Full US state name -> USPS abbreviation (50 states + DC)
    static ref STATE_ABBREVIATIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Alabama", "AL"),
        ("Alaska", "AK"),
        ("Arizona", "AZ"),
        ("Arkansas", "AR"),
        ("California", "CA"),
        ("Colorado", "CO"),
        ("Connecticut", "CT"),
        ("Delaware", "DE"),
        ("Florida", "FL"),
        ("Georgia", "GA"),
        ("Hawaii", "HI"),
        ("Idaho", "ID"),
        ("Illinois", "IL"),
        ("Indiana", "IN"),
        ("Iowa", "IA"),
        ("Kansas", "KS"),
        ("Kentucky", "KY"),
        ("Louisiana", "LA"),
        ("Maine", "ME"),
        ("Maryland", "MD"),
        ("Massachusetts", "MA"),
        ("Michigan", "MI"),
        ("Minnesota", "MN"),
        ("Mississippi", "MS"),
        ("Missouri", "MO"),
        ("Montana", "MT"),
        ("Nebraska", "NE"),
        ("Nevada", "NV"),
        ("New Hampshire", "NH"),
        ("New Jersey", "NJ"),
        ("New Mexico", "NM"),
        ("New York", "NY"),
        ("North Carolina", "NC"),
        ("North Dakota", "ND"),
        ("Ohio", "OH"),
        ("Oklahoma", "OK"),
        ("Oregon", "OR"),
        ("Pennsylvania", "PA"),
        ("Rhode Island", "RI"),
        ("South Carolina", "SC"),
        ("South Dakota", "SD"),
        ("Tennessee", "TN"),
        ("Texas", "TX"),
        ("Utah", "UT"),
        ("Vermont", "VT"),
        ("Virginia", "VA"),
        ("Washington", "WA"),
        ("West Virginia", "WV"),
        ("Wisconsin", "WI"),
        ("Wyoming", "WY"),
        ("District of Columbia", "DC"),
    ]);
}

/// Look up the USPS abbreviation for a full state name
pub fn state_abbreviation(state_name: &str) -> Option<&'static str> {
    STATE_ABBREVIATIONS.get(state_name).copied()
}

#[derive(Debug, Default, Deserialize)]
struct NominatimAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    municipality: Option<String>,
    county: Option<String>,
    state: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
    display_name: Option<String>,
}

pub struct GeocodingService {
    client: reqwest::Client,
    base_url: String,
}

impl GeocodingService {
    pub fn new(base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Reverse geocode a coordinate pair into a short display label.
    ///
    /// Total: network or parse failure falls back to the coordinate string.
    pub async fn reverse_label(&self, latitude: f64, longitude: f64) -> String {
        match self.reverse(latitude, longitude).await {
            Ok(response) => format_label(&response, latitude, longitude),
            Err(e) => {
                log::warn!("⚠️ Reverse geocoding failed for ({}, {}): {}", latitude, longitude, e);
                coordinate_label(latitude, longitude)
            }
        }
    }

    async fn reverse(&self, latitude: f64, longitude: f64) -> Result<NominatimResponse> {
        let url = format!(
            "{}/reverse?format=json&lat={}&lon={}&zoom=10&addressdetails=1",
            self.base_url, latitude, longitude
        );

        log::info!("🌐 Reverse geocoding ({}, {})", latitude, longitude);

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "TripLogService/1.0")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("provider returned status {}", status);
        }

        Ok(response.json().await?)
    }
}

/// Format a provider response into a place label, trying in order:
/// "City, ST" for US results, "City, State", state or city alone, the
/// first two segments of the display name, then raw coordinates.
fn format_label(response: &NominatimResponse, latitude: f64, longitude: f64) -> String {
    if let Some(address) = &response.address {
        let city = address
            .city
            .as_deref()
            .or(address.town.as_deref())
            .or(address.village.as_deref())
            .or(address.municipality.as_deref())
            .or(address.county.as_deref());
        let state = address.state.as_deref();

        match (city, state) {
            (Some(city), Some(state)) => {
                if address.country.as_deref() == Some("United States") {
                    let abbrev = state_abbreviation(state).unwrap_or(state);
                    return format!("{}, {}", city, abbrev);
                }
                return format!("{}, {}", city, state);
            }
            (None, Some(state)) => return state.to_string(),
            (Some(city), None) => return city.to_string(),
            (None, None) => {}
        }
    }

    if let Some(display_name) = &response.display_name {
        let mut parts = display_name.split(',').map(str::trim);
        if let Some(first) = parts.next() {
            if let Some(second) = parts.next() {
                return format!("{}, {}", first, second);
            }
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    coordinate_label(latitude, longitude)
}

fn coordinate_label(latitude: f64, longitude: f64) -> String {
    format!("{:.6}, {:.6}", latitude, longitude)
}

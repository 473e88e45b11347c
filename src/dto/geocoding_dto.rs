use serde::{Deserialize, Serialize};

// Query parameters for reverse geocoding
#[derive(Debug, Deserialize)]
pub struct ReverseGeocodeQuery {
    pub lat: f64,
    pub lon: f64,
}

// Response with the resolved place label
#[derive(Debug, Serialize)]
pub struct ReverseGeocodeResponse {
    pub label: String,
    pub latitude: f64,
    pub longitude: f64,
}

//! HTTP client for the route-computation backend
//!
//! The backend owns route computation, stop scheduling and HOS rule
//! evaluation over the road network; this client only forwards the trip
//! submission and hands back the parsed result.

use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

use crate::dto::trip_dto::TripRequest;
use crate::models::route::RouteResult;
use crate::utils::errors::{AppError, AppResult};

/// Error body the backend returns on domain failures, e.g. an address it
/// could not resolve
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: Option<String>,
}

/// Client for the route-computation service, constructed from its base
/// configuration and passed through `AppState`. No module-level state, so
/// tests can point an instance at a stub server.
pub struct RouteServiceClient {
    client: Client,
    base_url: String,
}

impl RouteServiceClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST the trip submission and parse the computed route.
    ///
    /// Transport failures surface as a generic retryable message; a
    /// backend-supplied error message is surfaced verbatim.
    pub async fn calculate_route(&self, request: &TripRequest) -> AppResult<RouteResult> {
        let url = format!("{}/api/calculate-route/", self.base_url);
        log::info!("🚀 Requesting route calculation from {}", url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("❌ Route backend unreachable: {}", e);
                AppError::ExternalApi(
                    "Route calculation service is unavailable. Please try again later.".to_string(),
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<BackendErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .unwrap_or_else(|| format!("Route calculation failed with status {}", status));
            log::error!("❌ Route backend error ({}): {}", status, message);
            return Err(AppError::ExternalApi(message));
        }

        let result: RouteResult = response.json().await.map_err(|e| {
            log::error!("❌ Failed to parse route response: {}", e);
            AppError::UpstreamData(format!("Failed to parse route response: {}", e))
        })?;

        log::info!(
            "✅ Route calculation successful: {:.1} mi, {:.1} h, {} stops, {} fuel stops",
            result.route.distance,
            result.route.duration,
            result.stops.len(),
            result.fuel_stops.len()
        );

        Ok(result)
    }

    /// Probe the backend health endpoint. Best effort; any failure counts
    /// as unreachable.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/api/health/", self.base_url);

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                log::warn!("⚠️ Backend health check failed: {}", e);
                false
            }
        }
    }
}

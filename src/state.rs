//! Shared application state
//!
//! State passed through the axum router: configuration, the route-backend
//! client, the reverse-geocoding client and the active HOS rule set. All
//! collaborators are explicit values, so tests can build a state pointed
//! at stub endpoints.

use std::sync::Arc;

use anyhow::Result;

use crate::config::environment::EnvironmentConfig;
use crate::models::duty::HosRules;
use crate::services::geocoding_service::GeocodingService;
use crate::services::route_client::RouteServiceClient;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub route_client: Arc<RouteServiceClient>,
    pub geocoding: Arc<GeocodingService>,
    pub hos_rules: HosRules,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Result<Self> {
        let route_client = RouteServiceClient::new(
            config.route_backend_url.clone(),
            config.route_backend_timeout_secs,
        )?;
        let geocoding = GeocodingService::new(config.nominatim_url.clone())?;

        Ok(Self {
            config,
            route_client: Arc::new(route_client),
            geocoding: Arc::new(geocoding),
            hos_rules: HosRules::default(),
        })
    }
}

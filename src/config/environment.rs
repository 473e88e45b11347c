//! Environment configuration
//!
//! Runtime configuration sourced from environment variables. Every value
//! has a development default so the service boots without a .env file.

use std::env;

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub host: String,
    pub port: u16,
    /// Base URL of the route-computation backend
    pub route_backend_url: String,
    pub route_backend_timeout_secs: u64,
    /// Retry budget carried from the original client configuration; the
    /// call path does not retry yet
    pub route_backend_retry_attempts: u32,
    /// Base URL of the Nominatim-style reverse-geocoding provider
    pub nominatim_url: String,
    /// Allowed CORS origins; empty means permissive development CORS
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
            route_backend_url: env::var("ROUTE_BACKEND_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            route_backend_timeout_secs: env::var("ROUTE_BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
            route_backend_retry_attempts: env::var("ROUTE_BACKEND_RETRY_ATTEMPTS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(3),
            nominatim_url: env::var("NOMINATIM_URL")
                .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(|origin| origin.trim().to_string())
                        .filter(|origin| !origin.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Bind address of the server
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

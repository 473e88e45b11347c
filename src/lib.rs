//! Trip log service
//!
//! Backend-for-frontend for a trucking trip planner. It forwards trip
//! submissions to the external route-computation service, validates the
//! returned route, and derives the ELD duty log and HOS compliance
//! summary the UI renders. A best-effort reverse-geocoding endpoint
//! resolves map-picked coordinates into short "City, ST" labels.

pub mod api;
pub mod config;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

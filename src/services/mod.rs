//! Services
//!
//! Duty-log derivation plus clients for the external collaborators: the
//! route-computation backend and the reverse-geocoding provider.

pub mod eld_service;
pub mod geocoding_service;
pub mod route_client;

//! Request and response shapes for the HTTP API

pub mod geocoding_dto;
pub mod trip_dto;

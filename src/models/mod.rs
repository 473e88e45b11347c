//! Domain models

pub mod duty;
pub mod route;

//! Configuration

pub mod environment;

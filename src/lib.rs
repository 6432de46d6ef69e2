//! Payment Context - subscription sign-up with aggregated validation
//!
//! Commands, value objects and entities never fail fast: each one records
//! its rule failures as notifications. The subscription handler merges them
//! into a single ordered report and persists only a fully valid student.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;

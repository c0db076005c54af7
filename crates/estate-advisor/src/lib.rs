//! Listing recommendations, construction cost estimates, and the property assistant.

pub mod assistant;
pub mod config;
pub mod construction;
pub mod error;
pub mod listings;
pub mod recommendations;
pub mod telemetry;

//! Receipt points service: validates submitted retail receipts, scores them
//! with a fixed rule set, and serves later lookups of the awarded points.

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;

//! Domain model
//!
//! Types and helpers that describe what the backend sends us:
//! - Scenario, play, news and alert snapshots
//! - Timestamp decoding for the backend's ISO-8601 variants
//! - Text formatting used by the widgets

pub mod models;
pub mod text;
pub mod timestamp;

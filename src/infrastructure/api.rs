//! Typed HTTP client for the Hedge Fund Agent backend

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;

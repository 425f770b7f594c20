//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - HTTP client for the backend
//! - Background API service
//! - Configuration loading
//! - CLI argument processing
//! - TUI foundation

pub mod api;
pub mod api_service;
pub mod cli;
pub mod config;
pub mod tui;

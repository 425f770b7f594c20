//! # Hedgeui - Hedge Fund Agent TUI Client
//!
//! A terminal user interface for the Hedge Fund Agent scenario analysis API, built with
//! Rust and Ratatui. The user describes a market scenario, browses the investment plays
//! the backend generates for it, and tracks one play to follow its news and alerts.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Application state, one sub-state per concern
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (HTTP requests, terminal resizes)
//! - **View** (`presentation`): Stateless rendering of the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use hedgeui::{core::msg::{composer::ComposerMsg, Msg}, AppState, update};
//!
//! let state = AppState::default();
//!
//! // An empty description never reaches the network
//! let (state, commands) = update(Msg::Composer(ComposerMsg::Submit), state);
//!
//! assert!(commands.is_empty());
//! assert!(state.composer.error.is_some());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, commands and the update function
//! - [`domain`] - Backend data model and text helpers
//! - [`infrastructure`] - HTTP client, API service, config, CLI and terminal
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

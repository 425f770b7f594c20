//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless view components, one per screen
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;

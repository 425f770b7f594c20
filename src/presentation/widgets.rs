//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod alert_item;
pub mod news_item;
pub mod play_card;
pub mod shrink_text;
pub mod theme;

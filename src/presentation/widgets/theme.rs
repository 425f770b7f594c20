//! Colors and date formats shared by the widgets

use chrono::{DateTime, Local, Utc};
use ratatui::style::Color;

use crate::domain::models::{AssetClass, Severity};

pub fn asset_color(asset_class: AssetClass) -> Color {
    match asset_class {
        AssetClass::Equity => Color::Blue,
        AssetClass::Commodity => Color::Yellow,
        AssetClass::FixedIncome => Color::Green,
    }
}

/// `risk_level` is free text; matching ignores case
pub fn risk_color(risk_level: &str) -> Color {
    match risk_level.trim().to_lowercase().as_str() {
        "low" => Color::Green,
        "medium" => Color::Yellow,
        "high" => Color::Red,
        _ => Color::Gray,
    }
}

pub fn severity_color(severity: &Severity) -> Color {
    match severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Info => Color::Blue,
        Severity::Other(_) => Color::Gray,
    }
}

pub fn format_datetime(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

//! Snapshots of backend entities.
//!
//! Everything here is produced by the backend and only held in memory for the
//! lifetime of a session. Field names follow the backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{text, timestamp};

/// Asset class a play belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AssetClass {
    Equity,
    Commodity,
    FixedIncome,
}

impl AssetClass {
    /// Human readable label, e.g. `Fixed Income`
    pub fn label(&self) -> String {
        text::title_case(&self.to_string())
    }
}

/// Alert severity.
///
/// The backend types severity as a free string, so values outside the known
/// three are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Info,
    Warning,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Other(raw) => raw,
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "critical" => Severity::Critical,
            _ => Severity::Other(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.as_str().to_string()
    }
}

/// A single recommended investment action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Play {
    pub id: String,
    pub asset_class: AssetClass,
    pub title: String,
    pub description: String,
    pub action: String,
    pub instruments: Vec<String>,
    pub rationale: String,
    pub risk_level: String,
    pub time_horizon: String,
    pub confidence_score: f64,
}

impl Play {
    pub fn confidence_percent(&self) -> String {
        text::percent(self.confidence_score)
    }

    pub fn instruments_label(&self) -> String {
        self.instruments.join(", ")
    }
}

/// A submitted market scenario with the backend's interpretation and plays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub description: String,
    pub interpreted_scenario: String,
    pub plays: Vec<Play>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_tracking: bool,
}

impl Scenario {
    pub fn play(&self, play_id: &str) -> Option<&Play> {
        self.plays.iter().find(|play| play.id == play_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub source: String,
    #[serde(with = "timestamp")]
    pub published_at: DateTime<Utc>,
    pub summary: String,
    pub relevance_score: f64,
}

impl NewsArticle {
    pub fn relevance_percent(&self) -> String {
        text::percent(self.relevance_score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub scenario_id: String,
    pub play_id: String,
    pub message: String,
    pub severity: Severity,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Identifies one tracked play within one scenario
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackingKey {
    pub scenario_id: String,
    pub play_id: String,
}

impl TrackingKey {
    pub fn new(scenario_id: impl Into<String>, play_id: impl Into<String>) -> Self {
        Self {
            scenario_id: scenario_id.into(),
            play_id: play_id.into(),
        }
    }
}

/// A play under monitoring together with what the backend found for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedScenario {
    pub scenario: Scenario,
    pub play: Play,
    pub news_articles: Vec<NewsArticle>,
    pub alerts: Vec<Alert>,
    #[serde(with = "timestamp")]
    pub last_updated: DateTime<Utc>,
    pub play_updates: Vec<String>,
}

impl TrackedScenario {
    pub fn key(&self) -> TrackingKey {
        TrackingKey::new(&self.scenario.id, &self.play.id)
    }

    pub fn is_for(&self, key: &TrackingKey) -> bool {
        self.scenario.id == key.scenario_id && self.play.id == key.play_id
    }
}

/// Response of `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub scenarios_count: usize,
    #[serde(default)]
    pub tracked_scenarios_count: usize,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn play_json() -> serde_json::Value {
        json!({
            "id": "play-1",
            "asset_class": "fixed_income",
            "title": "Long duration treasuries",
            "description": "Rates fall as growth slows",
            "action": "Buy",
            "instruments": ["TLT", "IEF"],
            "rationale": "Flight to safety",
            "risk_level": "Low",
            "time_horizon": "Medium-term",
            "confidence_score": 0.784
        })
    }

    #[test]
    fn test_play_decodes_backend_json() -> serde_json::Result<()> {
        let play: Play = serde_json::from_value(play_json())?;
        assert_eq!(play.asset_class, AssetClass::FixedIncome);
        assert_eq!(play.instruments_label(), "TLT, IEF");
        assert_eq!(play.confidence_percent(), "78%");
        Ok(())
    }

    #[test]
    fn test_unknown_asset_class_is_rejected() {
        let mut value = play_json();
        value["asset_class"] = json!("crypto");
        assert!(serde_json::from_value::<Play>(value).is_err());
    }

    #[rstest]
    #[case(AssetClass::Equity, "Equity")]
    #[case(AssetClass::Commodity, "Commodity")]
    #[case(AssetClass::FixedIncome, "Fixed Income")]
    fn test_asset_class_label(#[case] asset_class: AssetClass, #[case] expected: &str) {
        assert_eq!(asset_class.label(), expected);
    }

    #[rstest]
    #[case("info", Severity::Info)]
    #[case("warning", Severity::Warning)]
    #[case("critical", Severity::Critical)]
    #[case("urgent", Severity::Other("urgent".into()))]
    fn test_severity_from_wire(#[case] raw: &str, #[case] expected: Severity) {
        let severity: Severity = serde_json::from_value(json!(raw)).expect("severity decodes");
        assert_eq!(severity, expected);
        assert_eq!(severity.as_str(), raw);
    }

    #[test]
    fn test_scenario_defaults_tracking_flag_and_finds_plays() -> serde_json::Result<()> {
        let scenario: Scenario = serde_json::from_value(json!({
            "id": "sc-1",
            "description": "Fed delays rate cuts",
            "interpreted_scenario": "Higher for longer",
            "plays": [play_json()],
            "created_at": "2024-05-01T09:30:00.000001"
        }))?;
        assert!(!scenario.is_tracking);
        assert!(scenario.play("play-1").is_some());
        assert!(scenario.play("missing").is_none());
        Ok(())
    }

    #[test]
    fn test_tracked_scenario_key() -> serde_json::Result<()> {
        let tracked: TrackedScenario = serde_json::from_value(json!({
            "scenario": {
                "id": "sc-1",
                "description": "d",
                "interpreted_scenario": "i",
                "plays": [play_json()],
                "created_at": "2024-05-01T09:30:00Z",
                "is_tracking": true
            },
            "play": play_json(),
            "news_articles": [],
            "alerts": [{
                "id": "a-1",
                "scenario_id": "sc-1",
                "play_id": "play-1",
                "message": "Yields spiked",
                "severity": "warning",
                "created_at": "2024-05-02T10:00:00"
            }],
            "last_updated": "2024-05-02T10:00:00",
            "play_updates": ["Trim position"]
        }))?;
        let key = tracked.key();
        assert_eq!(key, TrackingKey::new("sc-1", "play-1"));
        assert!(tracked.is_for(&key));
        assert!(!tracked.is_for(&TrackingKey::new("sc-1", "play-2")));
        assert_eq!(tracked.alerts[0].severity, Severity::Warning);
        Ok(())
    }
}

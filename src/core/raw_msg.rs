use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::domain::models::{Scenario, TrackedScenario, TrackingKey};

/// Summary of a failed backend request, detached from the HTTP client types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// HTTP status when the backend answered with a non-success code
    pub status: Option<u16>,
    pub message: String,
}

impl ApiFailure {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    /// Text shown to the user: `on_status` when the backend rejected the request,
    /// the underlying error text otherwise.
    pub fn user_message(&self, on_status: &str) -> String {
        match self.status {
            Some(_) => on_status.to_string(),
            None => self.message.clone(),
        }
    }
}

/// Outcome of one backend request performed by the API service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiEvent {
    ScenarioCreated(Scenario),
    ScenarioCreateFailed(ApiFailure),
    TrackingStarted(TrackedScenario),
    TrackingStartFailed { key: TrackingKey, error: ApiFailure },
    TrackingRefreshed(TrackedScenario),
    TrackingRefreshFailed { key: TrackingKey, error: ApiFailure },
    TrackingStopped(TrackingKey),
    TrackingStopFailed { key: TrackingKey, error: ApiFailure },
}

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Resize(u16, u16),
    Quit,
    Resume,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Backend responses
    Api(ApiEvent),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick)
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::models::TrackingKey;

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated by AppRunner and requested through Cmd::RequestRender.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (backend requests, terminal resizes, logging).
/// Cmd captures application intent. The HTTP details live in
/// `infrastructure::api_service::ApiOperation` and `infrastructure::api::ApiClient`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Backend requests
    CreateScenario {
        description: String,
    },
    StartTracking {
        key: TrackingKey,
    },
    RefreshTracking {
        key: TrackingKey,
    },
    StopTracking {
        key: TrackingKey,
    },

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // User-initiated state changes on the backend
            Cmd::CreateScenario { .. } | Cmd::StartTracking { .. } | Cmd::StopTracking { .. } => 1,

            Cmd::RefreshTracking { .. } => 2,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
        }
    }
}

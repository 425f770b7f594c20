use serde::{Deserialize, Serialize};

use crate::domain::models::{TrackedScenario, TrackingKey};

/// Messages for the tracking dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TrackingMsg {
    Started(TrackedScenario),
    StartFailed { key: TrackingKey, error: String },

    Refresh,
    Refreshed(TrackedScenario),
    RefreshFailed { key: TrackingKey, error: String },

    Stop,
    Stopped(TrackingKey),
    StopFailed { key: TrackingKey, error: String },

    ScrollUp,
    ScrollDown,
    ScrollToTop,
}

use serde::{Deserialize, Serialize};

use crate::domain::models::Scenario;

/// Messages for the scenario result and its play list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScenarioMsg {
    Created(Scenario),
    /// Carries the text shown under the composer
    CreateFailed(String),
    SelectNext,
    SelectPrevious,
    TrackSelected,
}

use serde::{Deserialize, Serialize};

pub mod composer;
pub mod scenario;
pub mod system;
pub mod tracking;
pub mod ui;

use composer::ComposerMsg;
use scenario::ScenarioMsg;
use system::SystemMsg;
use tracking::TrackingMsg;
use ui::UiMsg;

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // View switching and the alert dialog
    Ui(UiMsg),

    // Scenario description editing and submission
    Composer(ComposerMsg),

    // Scenario results and play selection
    Scenario(ScenarioMsg),

    // Tracking dashboard
    Tracking(TrackingMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Composer(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}

use crate::{domain::models::Play, infrastructure::config::Config};

pub mod composer;
pub mod plays;
pub mod system;
pub mod tracking;
pub mod ui;

pub use composer::ComposerState;
pub use plays::PlaysState;
pub use system::SystemState;
pub use tracking::TrackingState;
pub use ui::{UiState, View};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub ui: UiState,
    pub composer: ComposerState,
    pub plays: PlaysState,
    pub tracking: TrackingState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the loaded config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn view(&self) -> View {
        self.ui.view
    }

    /// Play highlighted in the plays view
    pub fn selected_play(&self) -> Option<&Play> {
        self.plays.selected_play()
    }

    /// True while any backend request started by the user is in flight
    pub fn is_busy(&self) -> bool {
        self.composer.creating
            || self.plays.tracking_loading
            || self.tracking.refreshing
            || self.tracking.stopping
    }
}

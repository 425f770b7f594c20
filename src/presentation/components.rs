//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::{AppState, View};

pub mod alert_dialog;
pub mod create;
pub mod header;
pub mod plays;
pub mod status_bar;
pub mod tracking;

pub use alert_dialog::AlertDialogComponent;
pub use create::CreateComponent;
pub use header::HeaderComponent;
pub use plays::PlaysComponent;
pub use status_bar::StatusBarComponent;
pub use tracking::TrackingComponent;

/// Collection of all components
///
/// Components are stateless and receive state as parameters during render.
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub create: CreateComponent,
    pub plays: PlaysComponent,
    pub tracking: TrackingComponent,
    pub status_bar: StatusBarComponent,
    pub alert_dialog: AlertDialogComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// The alert dialog is drawn last so it covers the active view.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(HeaderComponent::HEIGHT), // Header
                Constraint::Min(0),                          // Active view
                Constraint::Length(1),                       // Status bar
            ])
            .split(area);

        self.header.view(state, frame, layout[0]);

        let main = layout[1].inner(Margin::new(1, 0));
        match state.view() {
            View::Create => self.create.view(state, frame, main),
            View::Plays => self.plays.view(state, frame, main),
            View::Tracking => self.tracking.view(state, frame, main),
        }

        self.status_bar.view(state, frame, layout[2]);

        if state.ui.has_alert() {
            self.alert_dialog.view(state, frame, area);
        }
    }
}

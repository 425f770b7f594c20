use serde::{Deserialize, Serialize};

use crate::core::{cmd::Cmd, msg::ui::UiMsg};

/// Which screen is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
    #[default]
    Create,
    Plays,
    Tracking,
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub view: View,
    /// Blocking alert dialog; swallows input while open
    pub alert: Option<String>,
}

impl UiState {
    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn show(&mut self, view: View) {
        self.view = view;
    }

    /// Only the dialog-related messages are handled here. `BackToCreate`
    /// touches several sub-states and is coordinated in `core::update`.
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        match msg {
            UiMsg::ShowAlert(message) => {
                self.alert = Some(message);
                vec![]
            }
            UiMsg::DismissAlert => {
                self.alert = None;
                vec![]
            }
            UiMsg::BackToCreate => {
                self.view = View::Create;
                vec![]
            }
        }
    }
}

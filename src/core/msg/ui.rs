use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    /// Leave the plays or tracking view for a fresh scenario
    BackToCreate,
    ShowAlert(String),
    DismissAlert,
}

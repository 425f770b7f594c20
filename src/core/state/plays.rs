use crate::domain::models::{Play, Scenario, TrackingKey};

/// The scenario currently shown in the plays view
#[derive(Debug, Clone, Default)]
pub struct PlaysState {
    pub scenario: Option<Scenario>,
    pub selected_index: Option<usize>,
    /// A start-tracking request is in flight
    pub tracking_loading: bool,
}

impl PlaysState {
    /// Shows a new scenario with its first play selected
    pub fn set_scenario(&mut self, scenario: Scenario) {
        self.selected_index = if scenario.plays.is_empty() {
            None
        } else {
            Some(0)
        };
        self.scenario = Some(scenario);
    }

    pub fn clear(&mut self) {
        self.scenario = None;
        self.selected_index = None;
    }

    pub fn len(&self) -> usize {
        self.scenario.as_ref().map_or(0, |s| s.plays.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn selected_play(&self) -> Option<&Play> {
        let scenario = self.scenario.as_ref()?;
        scenario.plays.get(self.selected_index?)
    }

    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
    }

    /// Key of the selected play, if one can be tracked
    pub fn selected_key(&self) -> Option<TrackingKey> {
        let scenario = self.scenario.as_ref()?;
        let play = self.selected_play()?;
        Some(TrackingKey::new(&scenario.id, &play.id))
    }

    pub fn is_current(&self, scenario_id: &str) -> bool {
        self.scenario.as_ref().is_some_and(|s| s.id == scenario_id)
    }
}

use crate::domain::models::{TrackedScenario, TrackingKey};

/// The tracked play shown in the dashboard
#[derive(Debug, Clone, Default)]
pub struct TrackingState {
    pub tracked: Option<TrackedScenario>,
    pub refreshing: bool,
    pub stopping: bool,
    /// Vertical scroll offset of the dashboard, in lines
    pub scroll: u16,
}

impl TrackingState {
    pub fn start(&mut self, tracked: TrackedScenario) {
        self.tracked = Some(tracked);
        self.refreshing = false;
        self.stopping = false;
        self.scroll = 0;
    }

    pub fn key(&self) -> Option<TrackingKey> {
        self.tracked.as_ref().map(TrackedScenario::key)
    }

    pub fn is_tracking(&self, key: &TrackingKey) -> bool {
        self.tracked.as_ref().is_some_and(|t| t.is_for(key))
    }

    /// Replaces the tracked data if it belongs to the same play; returns whether it did
    pub fn replace(&mut self, tracked: TrackedScenario) -> bool {
        if !self.is_tracking(&tracked.key()) {
            return false;
        }
        self.tracked = Some(tracked);
        true
    }

    pub fn clear(&mut self) {
        self.tracked = None;
        self.refreshing = false;
        self.stopping = false;
        self.scroll = 0;
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}

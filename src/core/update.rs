use crate::core::{
    cmd::Cmd,
    msg::{composer::ComposerMsg, scenario::ScenarioMsg, tracking::TrackingMsg, ui::UiMsg, Msg},
    state::{AppState, View},
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

pub const CREATE_SCENARIO_FAILED: &str = "Failed to create scenario";
pub const START_TRACKING_FAILED: &str = "Failed to start tracking. Please try again.";
pub const REFRESH_FAILED: &str = "Failed to refresh. Please try again.";
pub const STOP_TRACKING_FAILED: &str = "Failed to stop tracking. Please try again.";

/// Collaborators the update function needs but does not own
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Text editing is a no-op here; use [`update_with_context`] to edit the composer.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
    update_with_context(msg, state, &UpdateContext { text_area: &ENGINE })
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Ui(ui_msg) => update_ui(ui_msg, &mut state),
        Msg::Composer(composer_msg) => update_composer(composer_msg, &mut state, ctx),
        Msg::Scenario(scenario_msg) => update_scenario(scenario_msg, &mut state),
        Msg::Tracking(tracking_msg) => update_tracking(tracking_msg, &mut state),
    };
    (state, commands)
}

fn update_ui(msg: UiMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        UiMsg::BackToCreate => {
            if state.ui.view == View::Create {
                return vec![];
            }
            // Tracking keeps running on the backend; only the current scenario goes away
            state.plays.clear();
            state.ui.update(UiMsg::BackToCreate)
        }
        other => state.ui.update(other),
    }
}

fn update_composer(msg: ComposerMsg, state: &mut AppState, ctx: &UpdateContext<'_>) -> Vec<Cmd> {
    if state.ui.view != View::Create {
        return vec![];
    }

    match msg {
        ComposerMsg::ProcessTextAreaInput(key) => {
            if state.composer.is_editable() {
                state.composer.textarea = ctx.text_area.apply_keys(&state.composer.textarea, &[key]);
            }
            vec![]
        }
        ComposerMsg::InsertText(text) => {
            if state.composer.is_editable() {
                state.composer.textarea = ctx.text_area.insert_text(&state.composer.textarea, &text);
            }
            vec![]
        }
        ComposerMsg::Submit => match state.composer.begin_submit() {
            Some(description) => {
                state.system.set_status_message("Analyzing scenario...");
                vec![Cmd::CreateScenario { description }]
            }
            None => vec![],
        },
    }
}

fn update_scenario(msg: ScenarioMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        ScenarioMsg::Created(scenario) => {
            if !state.composer.creating {
                return vec![Cmd::LogInfo {
                    message: format!("Ignoring scenario {} created out of flow", scenario.id),
                }];
            }

            state.composer.succeed();
            state.system.set_status_message(format!(
                "Generated {} plays",
                scenario.plays.len()
            ));
            state.plays.set_scenario(scenario);
            state.ui.show(View::Plays);
            vec![]
        }

        ScenarioMsg::CreateFailed(message) => {
            state.composer.fail(message.clone());
            state.system.set_status_message(CREATE_SCENARIO_FAILED);
            vec![Cmd::LogError { message }]
        }

        ScenarioMsg::SelectNext => {
            state.plays.select_next();
            vec![]
        }

        ScenarioMsg::SelectPrevious => {
            state.plays.select_previous();
            vec![]
        }

        ScenarioMsg::TrackSelected => {
            if state.ui.view != View::Plays || state.plays.tracking_loading {
                return vec![];
            }
            match state.plays.selected_key() {
                Some(key) => {
                    state.plays.tracking_loading = true;
                    state.system.set_status_message("Starting tracking...");
                    vec![Cmd::StartTracking { key }]
                }
                None => vec![],
            }
        }
    }
}

fn update_tracking(msg: TrackingMsg, state: &mut AppState) -> Vec<Cmd> {
    match msg {
        TrackingMsg::Started(tracked) => {
            state.plays.tracking_loading = false;
            if !state.plays.is_current(&tracked.scenario.id) {
                return vec![Cmd::LogInfo {
                    message: format!(
                        "Ignoring tracking start for {}/{}: scenario no longer shown",
                        tracked.scenario.id, tracked.play.id
                    ),
                }];
            }

            state
                .system
                .set_status_message(format!("Tracking {}", tracked.play.title));
            state.tracking.start(tracked);
            state.ui.show(View::Tracking);
            vec![]
        }

        TrackingMsg::StartFailed { key, error } => {
            state.plays.tracking_loading = false;
            let mut cmds = vec![Cmd::LogError {
                message: format!(
                    "Start tracking {}/{} failed: {error}",
                    key.scenario_id, key.play_id
                ),
            }];
            if state.plays.is_current(&key.scenario_id) {
                cmds.extend(state.ui.update(UiMsg::ShowAlert(START_TRACKING_FAILED.into())));
            }
            cmds
        }

        TrackingMsg::Refresh => {
            if state.ui.view != View::Tracking || state.tracking.refreshing {
                return vec![];
            }
            match state.tracking.key() {
                Some(key) => {
                    state.tracking.refreshing = true;
                    vec![Cmd::RefreshTracking { key }]
                }
                None => vec![],
            }
        }

        TrackingMsg::Refreshed(tracked) => {
            state.tracking.refreshing = false;
            let key = tracked.key();
            if state.tracking.replace(tracked) {
                state.system.set_status_message("Refreshed");
                vec![]
            } else {
                vec![Cmd::LogInfo {
                    message: format!(
                        "Ignoring refresh for {}/{}: no longer tracked",
                        key.scenario_id, key.play_id
                    ),
                }]
            }
        }

        TrackingMsg::RefreshFailed { key, error } => {
            state.tracking.refreshing = false;
            let mut cmds = vec![Cmd::LogError {
                message: format!("Refresh {}/{} failed: {error}", key.scenario_id, key.play_id),
            }];
            if state.tracking.is_tracking(&key) {
                cmds.extend(state.ui.update(UiMsg::ShowAlert(REFRESH_FAILED.into())));
            }
            cmds
        }

        TrackingMsg::Stop => {
            if state.ui.view != View::Tracking || state.tracking.stopping {
                return vec![];
            }
            match state.tracking.key() {
                Some(key) => {
                    state.tracking.stopping = true;
                    vec![Cmd::StopTracking { key }]
                }
                None => vec![],
            }
        }

        TrackingMsg::Stopped(key) => {
            state.tracking.stopping = false;
            if !state.tracking.is_tracking(&key) {
                return vec![];
            }

            state.tracking.clear();
            state.plays.clear();
            state.ui.show(View::Create);
            state.system.set_status_message("Tracking stopped");
            vec![]
        }

        TrackingMsg::StopFailed { key, error } => {
            state.tracking.stopping = false;
            let mut cmds = vec![Cmd::LogError {
                message: format!(
                    "Stop tracking {}/{} failed: {error}",
                    key.scenario_id, key.play_id
                ),
            }];
            if state.tracking.is_tracking(&key) {
                cmds.extend(state.ui.update(UiMsg::ShowAlert(STOP_TRACKING_FAILED.into())));
            }
            cmds
        }

        TrackingMsg::ScrollUp => {
            state.tracking.scroll_up();
            vec![]
        }

        TrackingMsg::ScrollDown => {
            state.tracking.scroll_down();
            vec![]
        }

        TrackingMsg::ScrollToTop => {
            state.tracking.scroll_to_top();
            vec![]
        }
    }
}

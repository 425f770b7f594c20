use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{
            composer::ComposerMsg, scenario::ScenarioMsg, system::SystemMsg,
            tracking::TrackingMsg, ui::UiMsg, Msg,
        },
        raw_msg::{ApiEvent, RawMsg},
        state::{AppState, View},
        update::CREATE_SCENARIO_FAILED,
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => translate_paste(text, state),

        // Backend responses
        RawMsg::Api(event) => translate_api_event(event),
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // The alert dialog is modal
    if state.ui.has_alert() {
        return translate_alert_keys(key);
    }

    let view = state.view();
    if let Some(action) = state.config.config.keybindings.action_for(view, &key) {
        return translate_action_to_msg(action, view);
    }

    match view {
        // Everything else is typing
        View::Create => vec![Msg::Composer(ComposerMsg::ProcessTextAreaInput(key))],
        View::Plays | View::Tracking => vec![],
    }
}

fn translate_alert_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q') => {
            vec![Msg::Ui(UiMsg::DismissAlert)]
        }
        _ => vec![],
    }
}

fn translate_action_to_msg(action: Action, view: View) -> Vec<Msg> {
    match action {
        Action::SubmitScenario => vec![Msg::Composer(ComposerMsg::Submit)],
        Action::NextPlay => vec![Msg::Scenario(ScenarioMsg::SelectNext)],
        Action::PreviousPlay => vec![Msg::Scenario(ScenarioMsg::SelectPrevious)],
        Action::TrackPlay => vec![Msg::Scenario(ScenarioMsg::TrackSelected)],
        Action::BackToCreate => {
            if view == View::Create {
                vec![]
            } else {
                vec![Msg::Ui(UiMsg::BackToCreate)]
            }
        }
        Action::RefreshTracking => vec![Msg::Tracking(TrackingMsg::Refresh)],
        Action::StopTracking => vec![Msg::Tracking(TrackingMsg::Stop)],
        Action::ScrollUp => vec![Msg::Tracking(TrackingMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Tracking(TrackingMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Tracking(TrackingMsg::ScrollToTop)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}

fn translate_paste(text: String, state: &AppState) -> Vec<Msg> {
    if state.ui.has_alert() || state.view() != View::Create {
        return vec![];
    }
    vec![Msg::Composer(ComposerMsg::InsertText(text))]
}

fn translate_api_event(event: ApiEvent) -> Vec<Msg> {
    let msg = match event {
        ApiEvent::ScenarioCreated(scenario) => Msg::Scenario(ScenarioMsg::Created(scenario)),
        ApiEvent::ScenarioCreateFailed(error) => Msg::Scenario(ScenarioMsg::CreateFailed(
            error.user_message(CREATE_SCENARIO_FAILED),
        )),
        ApiEvent::TrackingStarted(tracked) => Msg::Tracking(TrackingMsg::Started(tracked)),
        ApiEvent::TrackingStartFailed { key, error } => Msg::Tracking(TrackingMsg::StartFailed {
            key,
            error: error.message,
        }),
        ApiEvent::TrackingRefreshed(tracked) => Msg::Tracking(TrackingMsg::Refreshed(tracked)),
        ApiEvent::TrackingRefreshFailed { key, error } => {
            Msg::Tracking(TrackingMsg::RefreshFailed {
                key,
                error: error.message,
            })
        }
        ApiEvent::TrackingStopped(key) => Msg::Tracking(TrackingMsg::Stopped(key)),
        ApiEvent::TrackingStopFailed { key, error } => Msg::Tracking(TrackingMsg::StopFailed {
            key,
            error: error.message,
        }),
    };
    vec![msg]
}

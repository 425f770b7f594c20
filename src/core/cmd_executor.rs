use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::{ApiFailure, RawMsg},
    },
    infrastructure::api_service::ApiOperation,
};

pub const API_SERVICE_UNAVAILABLE: &str = "Backend service is not running";

/// Command executor that routes Elm commands to the services owned by AppRunner
#[derive(Clone, Default)]
pub struct CmdExecutor {
    api_sender: Option<mpsc::UnboundedSender<ApiOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
    // Undeliverable backend requests are answered here
    raw_sender: Option<mpsc::UnboundedSender<RawMsg>>,
}

impl CmdExecutor {
    /// Create an executor with no services attached
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_sender(&mut self, api_sender: mpsc::UnboundedSender<ApiOperation>) {
        self.api_sender = Some(api_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Inject the runtime's raw message sender for reporting undelivered requests.
    pub fn set_raw_sender(&mut self, sender: mpsc::UnboundedSender<RawMsg>) {
        self.raw_sender = Some(sender);
    }

    /// Forward `op` to ApiService. When it cannot be delivered, the matching
    /// failure event is fed back so the pending flag is cleared.
    fn send_api(&self, op: ApiOperation) -> Result<()> {
        let op = match &self.api_sender {
            Some(api_sender) => match api_sender.send(op) {
                Ok(()) => return Ok(()),
                Err(mpsc::error::SendError(op)) => op,
            },
            None => op,
        };

        let name = op.name();
        let event = op.failed(ApiFailure::transport(API_SERVICE_UNAVAILABLE));
        if let Some(raw_sender) = &self.raw_sender {
            if raw_sender.send(RawMsg::Api(event)).is_err() {
                log::warn!("{name}: runtime is gone, failure not reported");
            }
        }
        Err(eyre!("{name} not sent: {API_SERVICE_UNAVAILABLE}"))
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::CreateScenario { description } => {
                self.send_api(ApiOperation::CreateScenario {
                    description: description.clone(),
                })?;
            }

            Cmd::StartTracking { key } => {
                self.send_api(ApiOperation::StartTracking { key: key.clone() })?;
            }

            Cmd::RefreshTracking { key } => {
                self.send_api(ApiOperation::RefreshTracking { key: key.clone() })?;
            }

            Cmd::StopTracking { key } => {
                self.send_api(ApiOperation::StopTracking { key: key.clone() })?;
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    let _ = tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    });
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                } else {
                    log::debug!("CmdExecutor: render request dropped (no render sender configured)");
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }
}

/// Extension trait for Cmd to get human-readable names
pub trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::CreateScenario { .. } => "CreateScenario".to_string(),
            Cmd::StartTracking { .. } => "StartTracking".to_string(),
            Cmd::RefreshTracking { .. } => "RefreshTracking".to_string(),
            Cmd::StopTracking { .. } => "StopTracking".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::raw_msg::ApiEvent, domain::models::TrackingKey};
    use pretty_assertions::assert_eq;

    fn create_test_executor() -> (CmdExecutor, mpsc::UnboundedReceiver<ApiOperation>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut executor = CmdExecutor::new();
        executor.set_api_sender(tx);
        (executor, rx)
    }

    #[test]
    fn test_create_scenario_is_routed_to_api() {
        let (executor, mut rx) = create_test_executor();
        let cmd = Cmd::CreateScenario {
            description: "Oil spikes 20%".to_string(),
        };

        executor.execute_command(&cmd).unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            ApiOperation::CreateScenario {
                description: "Oil spikes 20%".to_string()
            }
        );
    }

    #[test]
    fn test_tracking_commands_are_routed_to_api() {
        let (executor, mut rx) = create_test_executor();
        let key = TrackingKey::new("sc-1", "p-1");

        executor
            .execute_commands(&[
                Cmd::StartTracking { key: key.clone() },
                Cmd::RefreshTracking { key: key.clone() },
                Cmd::StopTracking { key: key.clone() },
            ])
            .unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            ApiOperation::StartTracking { key: key.clone() }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            ApiOperation::RefreshTracking { key: key.clone() }
        );
        assert_eq!(rx.try_recv().unwrap(), ApiOperation::StopTracking { key });
    }

    #[test]
    fn test_missing_service_reports_create_failure() {
        let mut executor = CmdExecutor::new();
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        executor.set_raw_sender(raw_tx);

        let result = executor.execute_command(&Cmd::CreateScenario {
            description: "x".to_string(),
        });

        assert!(result.is_err());
        assert_eq!(
            raw_rx.try_recv().unwrap(),
            RawMsg::Api(ApiEvent::ScenarioCreateFailed(ApiFailure::transport(
                API_SERVICE_UNAVAILABLE
            )))
        );
    }

    #[test]
    fn test_closed_api_channel_reports_stop_failure() {
        let (mut executor, rx) = create_test_executor();
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        executor.set_raw_sender(raw_tx);
        drop(rx);
        let key = TrackingKey::new("sc-1", "p-1");

        let log = executor
            .execute_commands(&[Cmd::StopTracking { key: key.clone() }])
            .unwrap();

        assert_eq!(log.len(), 1);
        assert!(log[0].starts_with("✗ Failed to execute StopTracking"));
        assert_eq!(
            raw_rx.try_recv().unwrap(),
            RawMsg::Api(ApiEvent::TrackingStopFailed {
                key,
                error: ApiFailure::transport(API_SERVICE_UNAVAILABLE),
            })
        );
    }

    #[test]
    fn test_execute_resize() {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor
            .execute_command(&Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }))
            .unwrap();

        assert_eq!(
            tui_rx.try_recv().unwrap(),
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn test_execute_multiple_commands() {
        let mut executor = CmdExecutor::new();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel::<()>();
        executor.set_render_request_sender(render_tx);

        let commands = vec![
            Cmd::RequestRender,
            Cmd::LogInfo {
                message: "test".to_string(),
            },
        ];

        let log = executor.execute_commands(&commands).unwrap();

        assert_eq!(log.len(), 2);
        assert!(log[0].contains("✓ Executed: RequestRender"));
        assert!(log[1].contains("✓ Executed: LogInfo"));
        render_rx.try_recv().unwrap();
    }

    #[test]
    fn test_cmd_name_trait() {
        assert_eq!(
            Cmd::StartTracking {
                key: TrackingKey::new("a", "b")
            }
            .name(),
            "StartTracking"
        );
        assert_eq!(
            Cmd::Tui(TuiCommand::Resize {
                width: 1,
                height: 1
            })
            .name(),
            "Tui(Resize)"
        );
    }
}

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::raw_msg::{ApiEvent, ApiFailure},
    domain::models::TrackingKey,
    infrastructure::api::{ApiClient, ApiError},
    RawMsg,
};

/// Backend requests queued for ApiService
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiOperation {
    CreateScenario { description: String },
    StartTracking { key: TrackingKey },
    RefreshTracking { key: TrackingKey },
    StopTracking { key: TrackingKey },
}

impl ApiOperation {
    pub fn name(&self) -> &'static str {
        match self {
            ApiOperation::CreateScenario { .. } => "CreateScenario",
            ApiOperation::StartTracking { .. } => "StartTracking",
            ApiOperation::RefreshTracking { .. } => "RefreshTracking",
            ApiOperation::StopTracking { .. } => "StopTracking",
        }
    }

    /// The failure event this operation reports when it cannot be performed
    pub fn failed(self, error: ApiFailure) -> ApiEvent {
        match self {
            ApiOperation::CreateScenario { .. } => ApiEvent::ScenarioCreateFailed(error),
            ApiOperation::StartTracking { key } => ApiEvent::TrackingStartFailed { key, error },
            ApiOperation::RefreshTracking { key } => ApiEvent::TrackingRefreshFailed { key, error },
            ApiOperation::StopTracking { key } => ApiEvent::TrackingStopFailed { key, error },
        }
    }
}

impl From<&ApiError> for ApiFailure {
    fn from(error: &ApiError) -> Self {
        match error {
            ApiError::Status { status, detail, .. } => ApiFailure::status(
                *status,
                detail.clone().unwrap_or_else(|| error.to_string()),
            ),
            _ => ApiFailure::transport(error.to_string()),
        }
    }
}

/// ApiService performs backend requests one at a time on a background task:
/// - receives ApiOperation from CmdExecutor
/// - reports each outcome as RawMsg::Api
/// - stops on cancellation, aborting the request in flight
pub struct ApiService {
    client: ApiClient,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<ApiOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<ApiOperation>, // op_tx - operations to perform
    CancellationToken,                   // shutdown signal
    ApiService,
);

impl ApiService {
    pub fn new(client: ApiClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewApiService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the ApiService in background task
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run_service().await;
        })
    }

    /// Main service loop
    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    let Some(op) = result else {
                        log::info!("ApiService: operation channel closed");
                        break;
                    };
                    log::debug!("ApiService: performing {}", op.name());

                    tokio::select! {
                        event = perform(&self.client, op) => {
                            if self.raw_tx.send(RawMsg::Api(event)).is_err() {
                                log::warn!("ApiService: runtime is gone, dropping result");
                                break;
                            }
                        }
                        _ = self.cancel_token.cancelled() => {
                            log::info!("ApiService cancelled with a request in flight");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }
    }
}

/// Performs one operation and folds the result into an ApiEvent
pub async fn perform(client: &ApiClient, op: ApiOperation) -> ApiEvent {
    match op {
        ApiOperation::CreateScenario { description } => {
            match client.create_scenario(&description).await {
                Ok(scenario) => {
                    log::info!(
                        "Created scenario {} with {} plays",
                        scenario.id,
                        scenario.plays.len()
                    );
                    ApiEvent::ScenarioCreated(scenario)
                }
                Err(e) => {
                    log::error!("Failed to create scenario: {e}");
                    ApiEvent::ScenarioCreateFailed(ApiFailure::from(&e))
                }
            }
        }

        ApiOperation::StartTracking { key } => {
            match client.start_tracking(&key.scenario_id, &key.play_id).await {
                Ok(tracked) => ApiEvent::TrackingStarted(tracked),
                Err(e) => {
                    log::error!("Failed to start tracking {key:?}: {e}");
                    ApiEvent::TrackingStartFailed {
                        error: ApiFailure::from(&e),
                        key,
                    }
                }
            }
        }

        ApiOperation::RefreshTracking { key } => {
            match client.refresh_tracking(&key.scenario_id, &key.play_id).await {
                Ok(tracked) => ApiEvent::TrackingRefreshed(tracked),
                Err(e) => {
                    log::error!("Failed to refresh tracking {key:?}: {e}");
                    ApiEvent::TrackingRefreshFailed {
                        error: ApiFailure::from(&e),
                        key,
                    }
                }
            }
        }

        ApiOperation::StopTracking { key } => {
            match client.stop_tracking(&key.scenario_id, &key.play_id).await {
                Ok(()) => ApiEvent::TrackingStopped(key),
                Err(e) => {
                    log::error!("Failed to stop tracking {key:?}: {e}");
                    ApiEvent::TrackingStopFailed {
                        error: ApiFailure::from(&e),
                        key,
                    }
                }
            }
        }
    }
}

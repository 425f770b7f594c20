//! In-process stand-in for the Hedge Fund Agent backend.
#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

pub const SCENARIO_ID: &str = "sc-1";
pub const GOOD_PLAY: &str = "play-1";
/// Starting to track this play fails with a 500
pub const BROKEN_PLAY: &str = "play-2";
/// Scenario descriptions containing this word make creation fail
pub const CRASH_WORD: &str = "crash";

/// Detail returned by refresh and stop while they are set to fail
pub const FEED_DOWN: &str = "Market data feed unavailable";

#[derive(Default)]
struct Shared {
    log: Mutex<Vec<String>>,
    failing_updates: AtomicBool,
}

type Requests = Arc<Shared>;

pub struct FakeBackend {
    pub base_url: String,
    requests: Requests,
    handle: JoinHandle<()>,
}

impl FakeBackend {
    pub async fn spawn() -> Self {
        let requests: Requests = Arc::default();
        let app = Router::new()
            .route("/health", get(health))
            .route("/scenarios", get(list_scenarios).post(create_scenario))
            .route("/scenarios/:id", get(get_scenario))
            .route("/tracking", get(list_tracking))
            .route("/tracking/start", post(start_tracking))
            .route(
                "/tracking/:scenario_id/:play_id",
                get(get_tracking).delete(stop_tracking),
            )
            .route(
                "/tracking/:scenario_id/:play_id/refresh",
                post(refresh_tracking),
            )
            .with_state(Arc::clone(&requests));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("fake backend address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve fake backend");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Requests seen so far, as `METHOD /path`
    pub fn requests(&self) -> Vec<String> {
        self.requests.log.lock().expect("requests lock").clone()
    }

    /// Makes refresh and stop answer 503 until switched back
    pub fn fail_tracking_updates(&self, failing: bool) {
        self.requests.failing_updates.store(failing, Ordering::SeqCst);
    }
}

impl Drop for FakeBackend {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn record(requests: &Requests, line: String) {
    requests.log.lock().expect("requests lock").push(line);
}

fn feed_down(requests: &Requests) -> Option<(StatusCode, Json<Value>)> {
    requests.failing_updates.load(Ordering::SeqCst).then(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "detail": FEED_DOWN })),
        )
    })
}

fn not_found(what: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "detail": format!("{what} not found") })),
    )
}

pub fn play_json(id: &str) -> Value {
    let (asset_class, title) = if id == GOOD_PLAY {
        ("equity", "Short regional banks")
    } else {
        ("fixed_income", "Long duration treasuries")
    };
    json!({
        "id": id,
        "asset_class": asset_class,
        "title": title,
        "description": "Funding costs stay elevated for longer",
        "action": "Sell",
        "instruments": ["KRE", "IAT"],
        "rationale": "Deposit flight squeezes margins",
        "risk_level": "High",
        "time_horizon": "Short-term",
        "confidence_score": 0.72
    })
}

pub fn scenario_json(description: &str) -> Value {
    json!({
        "id": SCENARIO_ID,
        "description": description,
        "interpreted_scenario": "Rates remain higher for longer as inflation persists",
        "plays": [play_json(GOOD_PLAY), play_json(BROKEN_PLAY)],
        "created_at": "2024-05-01T09:30:00.123456"
    })
}

pub fn tracked_json(play_id: &str, refreshed: bool) -> Value {
    let (alerts, updates) = if refreshed {
        (
            json!([{
                "id": "alert-1",
                "scenario_id": SCENARIO_ID,
                "play_id": play_id,
                "message": "KRE fell 4% on deposit data",
                "severity": "critical",
                "created_at": "2024-05-02T14:00:00"
            }]),
            json!(["Consider tightening the stop loss"]),
        )
    } else {
        (json!([]), json!([]))
    };
    let mut scenario = scenario_json("Fed delays rate cuts");
    scenario["is_tracking"] = json!(true);
    json!({
        "scenario": scenario,
        "play": play_json(play_id),
        "news_articles": [{
            "title": "Regional lenders under pressure",
            "url": "https://news.example/regional-lenders",
            "source": "Wire",
            "published_at": "2024-05-02T08:00:00Z",
            "summary": "Deposit outflows resumed in April.",
            "relevance_score": 0.9
        }],
        "alerts": alerts,
        "last_updated": "2024-05-02T14:05:00",
        "play_updates": updates
    })
}

async fn health(State(requests): State<Requests>) -> Json<Value> {
    record(&requests, "GET /health".into());
    Json(json!({
        "status": "healthy",
        "timestamp": "2024-05-02T14:05:00",
        "scenarios_count": 1,
        "tracked_scenarios_count": 0
    }))
}

async fn list_scenarios(State(requests): State<Requests>) -> Json<Value> {
    record(&requests, "GET /scenarios".into());
    Json(json!([scenario_json("Fed delays rate cuts")]))
}

async fn create_scenario(
    State(requests): State<Requests>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&requests, "POST /scenarios".into());
    let description = body["description"].as_str().unwrap_or_default();
    if description.contains(CRASH_WORD) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "LLM unavailable" })),
        );
    }
    (StatusCode::OK, Json(scenario_json(description)))
}

async fn get_scenario(
    State(requests): State<Requests>,
    Path(id): Path<String>,
) -> (StatusCode, Json<Value>) {
    record(&requests, format!("GET /scenarios/{id}"));
    if id != SCENARIO_ID {
        return not_found("Scenario");
    }
    (StatusCode::OK, Json(scenario_json("Fed delays rate cuts")))
}

async fn list_tracking(State(requests): State<Requests>) -> Json<Value> {
    record(&requests, "GET /tracking".into());
    Json(json!([tracked_json(GOOD_PLAY, false)]))
}

async fn start_tracking(
    State(requests): State<Requests>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    record(&requests, "POST /tracking/start".into());
    let scenario_id = body["scenario_id"].as_str().unwrap_or_default();
    let play_id = body["play_id"].as_str().unwrap_or_default();
    if scenario_id != SCENARIO_ID {
        return not_found("Scenario");
    }
    if play_id == BROKEN_PLAY {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "News provider unavailable" })),
        );
    }
    (StatusCode::OK, Json(tracked_json(play_id, false)))
}

async fn get_tracking(
    State(requests): State<Requests>,
    Path((scenario_id, play_id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    record(&requests, format!("GET /tracking/{scenario_id}/{play_id}"));
    if scenario_id != SCENARIO_ID {
        return not_found("Tracked scenario");
    }
    (StatusCode::OK, Json(tracked_json(&play_id, false)))
}

async fn refresh_tracking(
    State(requests): State<Requests>,
    Path((scenario_id, play_id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    record(
        &requests,
        format!("POST /tracking/{scenario_id}/{play_id}/refresh"),
    );
    if let Some(failure) = feed_down(&requests) {
        return failure;
    }
    if scenario_id != SCENARIO_ID {
        return not_found("Tracked scenario");
    }
    (StatusCode::OK, Json(tracked_json(&play_id, true)))
}

async fn stop_tracking(
    State(requests): State<Requests>,
    Path((scenario_id, play_id)): Path<(String, String)>,
) -> (StatusCode, Json<Value>) {
    record(&requests, format!("DELETE /tracking/{scenario_id}/{play_id}"));
    if let Some(failure) = feed_down(&requests) {
        return failure;
    }
    if scenario_id != SCENARIO_ID {
        return not_found("Tracked scenario");
    }
    (
        StatusCode::OK,
        Json(json!({ "message": "Stopped tracking" })),
    )
}

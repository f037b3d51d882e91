//! Shared mock telescope daemon for integration tests.
//!
//! Serves `/status` with a fixed payload and accepts any directive at
//! the root, recording hit counts so tests can observe poll activity.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

/// Shared observability state for the mock daemon.
#[derive(Default)]
pub struct DaemonState {
    /// Number of `GET /status` requests received.
    pub status_hits: AtomicUsize,
    /// Number of directive requests received.
    pub directive_hits: AtomicUsize,
    /// The most recently received directive path segment.
    pub last_directive: Mutex<Option<String>>,
}

/// Spawn the standard mock daemon on an ephemeral port.
///
/// `/status` answers `{"status": "Tracking", "ra": 12.25, "dec": 45.5}`;
/// any directive answers 200 except `fail`, which answers 503.
/// Returns the daemon's base URL and its shared state.
pub async fn spawn_mock_daemon() -> (String, Arc<DaemonState>) {
    let state = Arc::new(DaemonState::default());

    let app = Router::new()
        .route("/status", get(status_handler))
        .route("/{directive}", get(directive_handler))
        .with_state(Arc::clone(&state));

    (serve(app).await, state)
}

/// Spawn a daemon whose `/status` body is not valid JSON.
pub async fn spawn_malformed_status_daemon() -> String {
    let app = Router::new().route("/status", get(|| async { "not json" }));
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock daemon");
    let addr = listener.local_addr().expect("mock daemon local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve mock daemon");
    });

    format!("http://{addr}")
}

async fn status_handler(State(state): State<Arc<DaemonState>>) -> Json<serde_json::Value> {
    state.status_hits.fetch_add(1, Ordering::SeqCst);
    Json(serde_json::json!({
        "status": "Tracking",
        "ra": 12.25,
        "dec": 45.5,
    }))
}

async fn directive_handler(
    State(state): State<Arc<DaemonState>>,
    Path(directive): Path<String>,
) -> StatusCode {
    state.directive_hits.fetch_add(1, Ordering::SeqCst);
    *state.last_directive.lock().expect("mock daemon lock") = Some(directive.clone());

    if directive == "fail" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    }
}

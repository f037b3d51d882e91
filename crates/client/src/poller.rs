//! Repeating status poll loop.
//!
//! One task per active poll, owned by the
//! [`Dispatcher`](crate::dispatcher::Dispatcher).  Each cycle fetches
//! `/status` and writes the rendered payload into the display.  Cycles
//! are sequential -- the loop awaits each request before the next tick
//! fires, so in-flight requests never overlap.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use telmon_core::status::render_status;

use crate::api::TelescopedApi;
use crate::display::StatusDisplay;
use crate::events::TelEvent;

/// Run the poll loop until `cancel` fires.
///
/// The first cycle runs after one full `interval` has elapsed, not
/// immediately.
pub async fn run_poll_loop(
    api: Arc<TelescopedApi>,
    display: Arc<dyn StatusDisplay>,
    event_tx: broadcast::Sender<TelEvent>,
    interval: Duration,
    cancel: CancellationToken,
) {
    let mut ticker = interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Poll loop cancelled");
                return;
            }
            _ = ticker.tick() => {
                poll_once(&api, display.as_ref(), &event_tx).await;
            }
        }
    }
}

/// Execute a single poll cycle: fetch `/status`, render the payload,
/// update the display.
///
/// On failure the display keeps its previous contents and a
/// [`TelEvent::PollFailed`] is broadcast.
pub async fn poll_once(
    api: &TelescopedApi,
    display: &dyn StatusDisplay,
    event_tx: &broadcast::Sender<TelEvent>,
) {
    tracing::debug!("Fetching telescope status");

    match api.status().await {
        Ok(payload) => {
            display.update(&render_status(&payload));
            let _ = event_tx.send(TelEvent::StatusUpdated {
                payload,
                received_at: Utc::now(),
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Status poll failed");
            let _ = event_tx.send(TelEvent::PollFailed {
                error: e.to_string(),
            });
        }
    }
}

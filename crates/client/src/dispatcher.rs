//! Directive dispatch and poll-handle ownership.
//!
//! [`Dispatcher`] issues directives to the daemon and owns the single
//! repeating status poll.  The active poll's handle is stored
//! explicitly: stopping always cancels that exact stored handle, and
//! starting a new poll stops the previous one first, so at most one
//! poll task exists at any time.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{broadcast, Mutex};
use tokio_util::sync::CancellationToken;

use telmon_core::directive::Directive;

use crate::api::{TelApiError, TelescopedApi};
use crate::display::StatusDisplay;
use crate::events::TelEvent;
use crate::poller::run_poll_loop;

/// Broadcast channel capacity for client events.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Default period between status poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// How long to wait for a cancelled poll task to exit.
const POLL_JOIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Dispatches directives and manages the repeating status poll.
pub struct Dispatcher {
    api: Arc<TelescopedApi>,
    display: Arc<dyn StatusDisplay>,
    event_tx: broadcast::Sender<TelEvent>,
    poll_interval: Duration,
    /// The single active poll, if any.
    active_poll: Mutex<Option<PollHandle>>,
    /// Master cancellation token -- cancelled during shutdown.
    cancel: CancellationToken,
}

/// Bookkeeping for the active poll task.
struct PollHandle {
    /// Per-poll cancellation token (child of the master token).
    cancel: CancellationToken,
    task: tokio::task::JoinHandle<()>,
}

/// Errors that can occur when dispatching a directive.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The directive HTTP call failed; poll state was left untouched.
    #[error("Failed to dispatch directive: {0}")]
    Dispatch(#[from] TelApiError),
}

impl Dispatcher {
    /// Create a dispatcher with the default 2000 ms poll interval.
    pub fn new(api: TelescopedApi, display: Arc<dyn StatusDisplay>) -> Self {
        Self::with_interval(api, display, DEFAULT_POLL_INTERVAL)
    }

    /// Create a dispatcher with a custom poll interval.
    pub fn with_interval(
        api: TelescopedApi,
        display: Arc<dyn StatusDisplay>,
        poll_interval: Duration,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            api: Arc::new(api),
            display,
            event_tx,
            poll_interval,
            active_poll: Mutex::new(None),
            cancel: CancellationToken::new(),
        }
    }

    /// Subscribe to client events.
    pub fn subscribe(&self) -> broadcast::Receiver<TelEvent> {
        self.event_tx.subscribe()
    }

    /// Whether a repeating poll is currently active.
    pub async fn is_polling(&self) -> bool {
        self.active_poll.lock().await.is_some()
    }

    /// Dispatch a directive to the daemon.
    ///
    /// Sends `GET /<directive>`.  On success, `stop` cancels the
    /// active poll and any other directive (re)starts it.  On failure
    /// the error propagates and the poll state is left untouched.
    pub async fn dispatch(&self, directive: &Directive) -> Result<(), DispatchError> {
        self.api.dispatch(directive).await?;

        let _ = self.event_tx.send(TelEvent::Dispatched {
            directive: directive.to_string(),
        });

        if directive.is_stop() {
            self.stop_poll().await;
        } else {
            self.start_poll().await;
        }

        tracing::info!(directive = %directive, "Directive dispatched");
        Ok(())
    }

    /// Stop any active poll and cancel the master token.
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down dispatcher");
        self.cancel.cancel();
        self.stop_poll().await;
    }

    // ---- private helpers ----

    /// Start the repeating poll, stopping the previous one first so
    /// that at most one poll task is ever active.
    async fn start_poll(&self) {
        let mut slot = self.active_poll.lock().await;

        if let Some(previous) = slot.take() {
            tracing::info!("Replacing active status poll");
            Self::cancel_handle(previous, &self.event_tx).await;
        }

        let cancel = self.cancel.child_token();
        let task = tokio::spawn(run_poll_loop(
            Arc::clone(&self.api),
            Arc::clone(&self.display),
            self.event_tx.clone(),
            self.poll_interval,
            cancel.clone(),
        ));

        *slot = Some(PollHandle { cancel, task });

        let _ = self.event_tx.send(TelEvent::PollStarted);
        tracing::info!(
            interval_ms = self.poll_interval.as_millis() as u64,
            "Status poll started",
        );
    }

    /// Stop the active poll, if any, by cancelling its stored handle.
    async fn stop_poll(&self) {
        let mut slot = self.active_poll.lock().await;
        if let Some(handle) = slot.take() {
            Self::cancel_handle(handle, &self.event_tx).await;
        }
    }

    /// Cancel a specific poll handle and wait for its task to exit.
    async fn cancel_handle(handle: PollHandle, event_tx: &broadcast::Sender<TelEvent>) {
        handle.cancel.cancel();
        let _ = tokio::time::timeout(POLL_JOIN_TIMEOUT, handle.task).await;

        let _ = event_tx.send(TelEvent::PollStopped);
        tracing::info!("Status poll stopped");
    }
}

//! Events broadcast by the client engine.
//!
//! These represent the state changes a frontend cares about: directive
//! dispatch, poll lifecycle, and the outcome of each poll cycle.
//! Subscribe via [`Dispatcher::subscribe`](crate::dispatcher::Dispatcher::subscribe).

use chrono::{DateTime, Utc};
use serde::Serialize;
use telmon_core::status::StatusPayload;

/// A high-level event emitted by the dispatcher and the poll loop.
#[derive(Debug, Clone, Serialize)]
pub enum TelEvent {
    /// A directive was accepted by the daemon.
    Dispatched {
        /// Wire string of the dispatched directive.
        directive: String,
    },

    /// A repeating status poll was started.
    PollStarted,

    /// The active status poll was stopped -- by a stop directive, by
    /// being replaced with a newer poll, or during shutdown.
    PollStopped,

    /// A poll cycle succeeded and the display was updated.
    StatusUpdated {
        payload: StatusPayload,
        received_at: DateTime<Utc>,
    },

    /// A poll cycle failed; the display was left unchanged.
    PollFailed {
        /// Human-readable error description.
        error: String,
    },
}

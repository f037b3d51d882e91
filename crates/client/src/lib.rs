//! HTTP client engine for the telescope daemon.
//!
//! Provides the REST wrapper around the daemon's endpoints, the
//! dispatcher that owns the repeating status poll, the poll loop
//! itself, the status display seam, and the broadcast event types.

pub mod api;
pub mod dispatcher;
pub mod display;
pub mod events;
pub mod poller;

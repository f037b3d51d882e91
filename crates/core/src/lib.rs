//! Core domain types for the telmon telescope client.
//!
//! Directives, the `/status` payload, and status rendering, shared by
//! the client engine and the console binary.  No I/O lives here.

pub mod directive;
pub mod status;

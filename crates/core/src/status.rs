//! Telescope status payload and display rendering.

use serde::{Deserialize, Serialize};

/// Snapshot returned by the daemon's `/status` endpoint.
///
/// The daemon may include additional fields; only these three are
/// meaningful to the client.  `status` is opaque -- it is displayed,
/// never interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Opaque status indicator (e.g. `"Tracking"`, `"Slewing"`).
    pub status: String,
    /// Right ascension, as reported by the daemon.
    pub ra: f64,
    /// Declination, as reported by the daemon.
    pub dec: f64,
}

/// Render a status payload into display markup: the status indicator,
/// then labelled RA and DEC coordinates, separated by `<br>`.
pub fn render_status(payload: &StatusPayload) -> String {
    format!(
        "{}<br>RA: {}<br>DEC: {}",
        payload.status, payload.ra, payload.dec
    )
}

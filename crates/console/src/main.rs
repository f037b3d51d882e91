//! `telmon-console` -- terminal status console for the telescope daemon.
//!
//! Dispatches a directive to the daemon, then follows the repeating
//! status poll and prints each update.  Ctrl-C dispatches `stop` and
//! exits.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default                 | Description                |
//! |--------------------|----------|-------------------------|----------------------------|
//! | `TELESCOPED_URL`   | no       | `http://localhost:8080` | Daemon base HTTP URL       |
//! | `POLL_INTERVAL_MS` | no       | `2000`                  | Poll period, milliseconds  |

mod config;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use telmon_client::api::TelescopedApi;
use telmon_client::dispatcher::Dispatcher;
use telmon_client::display::{MemoryDisplay, StatusDisplay};
use telmon_client::events::TelEvent;
use telmon_core::directive::Directive;
use telmon_core::status::render_status;

use config::ConsoleConfig;

/// Directive dispatched when none is given on the command line.
const DEFAULT_DIRECTIVE: &str = "start";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telmon_console=info,telmon_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ConsoleConfig::from_env();
    let directive = std::env::args()
        .nth(1)
        .map(Directive::new)
        .unwrap_or_else(|| Directive::new(DEFAULT_DIRECTIVE));

    tracing::info!(
        daemon_url = %config.daemon_url,
        poll_interval_ms = config.poll_interval_ms,
        directive = %directive,
        "Starting telmon console",
    );

    let display: Arc<dyn StatusDisplay> = Arc::new(MemoryDisplay::new());
    let dispatcher = Dispatcher::with_interval(
        TelescopedApi::new(config.daemon_url.clone()),
        display,
        Duration::from_millis(config.poll_interval_ms),
    );
    let mut events = dispatcher.subscribe();

    if let Err(e) = dispatcher.dispatch(&directive).await {
        tracing::error!(error = %e, "Failed to dispatch directive");
        std::process::exit(1);
    }

    // A stop directive is one-shot: nothing to follow afterwards.
    if directive.is_stop() {
        return;
    }

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Ctrl-C received, stopping status poll");
                if let Err(e) = dispatcher.dispatch(&Directive::Stop).await {
                    tracing::warn!(error = %e, "Failed to dispatch stop directive");
                }
                dispatcher.shutdown().await;
                return;
            }
            event = events.recv() => {
                match event {
                    Ok(TelEvent::StatusUpdated { payload, .. }) => {
                        // The display markup uses <br> separators; the
                        // terminal wants newlines.
                        println!("{}\n", render_status(&payload).replace("<br>", "\n"));
                    }
                    Ok(TelEvent::PollFailed { error }) => {
                        tracing::warn!(error = %error, "Status poll failed");
                    }
                    Ok(_) => {}
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "Event stream lagged");
                    }
                    Err(RecvError::Closed) => return,
                }
            }
        }
    }
}

//! Console configuration loaded from environment variables.

/// Configuration for the console binary.
///
/// All fields have defaults suitable for a daemon running on the local
/// machine. Override via environment variables.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base HTTP URL of the telescope daemon.
    pub daemon_url: String,
    /// Period between status poll cycles, in milliseconds.
    pub poll_interval_ms: u64,
}

impl ConsoleConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                 |
    /// |--------------------|-------------------------|
    /// | `TELESCOPED_URL`   | `http://localhost:8080` |
    /// | `POLL_INTERVAL_MS` | `2000`                  |
    pub fn from_env() -> Self {
        let daemon_url =
            std::env::var("TELESCOPED_URL").unwrap_or_else(|_| "http://localhost:8080".into());

        let poll_interval_ms: u64 = std::env::var("POLL_INTERVAL_MS")
            .unwrap_or_else(|_| "2000".into())
            .parse()
            .expect("POLL_INTERVAL_MS must be a valid u64");

        Self {
            daemon_url,
            poll_interval_ms,
        }
    }
}

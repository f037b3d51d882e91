//! Directives sent to the telescope daemon.
//!
//! A directive is the path segment of a `GET /<directive>` request.
//! Only `stop` carries client-side meaning (it halts the status poll);
//! everything else is forwarded verbatim and interpreted by the daemon
//! alone.

use std::fmt;

/// The literal directive string that halts status polling.
pub const STOP_DIRECTIVE: &str = "stop";

/// A command dispatched to the telescope daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Halt the active status poll.
    Stop,
    /// Any other daemon action, dispatched as-is.
    Action(String),
}

impl Directive {
    /// Build a directive from its wire string.
    ///
    /// Exactly `"stop"` maps to [`Directive::Stop`]; anything else is
    /// an opaque action with no further interpretation.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw == STOP_DIRECTIVE {
            Self::Stop
        } else {
            Self::Action(raw)
        }
    }

    /// Seek the telescope axis home positions.
    pub fn home() -> Self {
        Self::Action("home".into())
    }

    /// Find the telescope axis limit positions.
    pub fn limits() -> Self {
        Self::Action("limits".into())
    }

    /// Drive the telescope to its stow position.
    pub fn stow() -> Self {
        Self::Action("stow".into())
    }

    /// Stop the telescope and make the daemon reread its config files.
    pub fn reset() -> Self {
        Self::Action("reset".into())
    }

    /// The URL path segment this directive dispatches to.
    pub fn path(&self) -> &str {
        match self {
            Self::Stop => STOP_DIRECTIVE,
            Self::Action(action) => action,
        }
    }

    /// Whether this directive halts polling rather than starting it.
    pub fn is_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_string_maps_to_stop_variant() {
        assert_eq!(Directive::new("stop"), Directive::Stop);
        assert!(Directive::new("stop").is_stop());
    }

    #[test]
    fn other_strings_are_opaque_actions() {
        let d = Directive::new("start");
        assert_eq!(d, Directive::Action("start".into()));
        assert!(!d.is_stop());
    }

    #[test]
    fn stop_match_is_case_sensitive() {
        // The daemon matches commands loosely, but the poll-halting
        // directive is the exact literal "stop".
        assert_eq!(Directive::new("Stop"), Directive::Action("Stop".into()));
    }

    #[test]
    fn path_round_trips_the_wire_string() {
        assert_eq!(Directive::new("home").path(), "home");
        assert_eq!(Directive::Stop.path(), "stop");
    }

    #[test]
    fn well_known_actions_use_daemon_command_names() {
        assert_eq!(Directive::home().path(), "home");
        assert_eq!(Directive::limits().path(), "limits");
        assert_eq!(Directive::stow().path(), "stow");
        assert_eq!(Directive::reset().path(), "reset");
    }

    #[test]
    fn display_matches_path() {
        assert_eq!(Directive::new("limits").to_string(), "limits");
        assert_eq!(Directive::Stop.to_string(), "stop");
    }
}

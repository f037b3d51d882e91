//! Status display seam.
//!
//! The poll loop writes rendered status markup into a
//! [`StatusDisplay`].  [`MemoryDisplay`] is the standard
//! implementation; the console binary reads it back and re-renders the
//! markup for the terminal.

use std::sync::RwLock;

/// Sink for rendered status markup.
///
/// The poll loop overwrites the contents on every successful cycle; a
/// failed cycle leaves the previous contents in place.
pub trait StatusDisplay: Send + Sync {
    /// Replace the display contents with `markup`.
    fn update(&self, markup: &str);

    /// Current display contents.
    fn contents(&self) -> String;
}

/// In-memory display backed by an `RwLock<String>`.
#[derive(Debug, Default)]
pub struct MemoryDisplay {
    contents: RwLock<String>,
}

impl MemoryDisplay {
    /// Create an empty display.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusDisplay for MemoryDisplay {
    fn update(&self, markup: &str) {
        *self.contents.write().expect("display lock poisoned") = markup.to_string();
    }

    fn contents(&self) -> String {
        self.contents.read().expect("display lock poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_previous_contents() {
        let display = MemoryDisplay::new();
        assert_eq!(display.contents(), "");

        display.update("Tracking<br>RA: 1<br>DEC: 2");
        display.update("Stowed<br>RA: 0<br>DEC: -90");

        assert_eq!(display.contents(), "Stowed<br>RA: 0<br>DEC: -90");
    }
}

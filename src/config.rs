//! Runtime settings
//!
//! Resolved once from the command line in `main` and handed to the UI.

use std::time::Duration;

/// Default delay between auto-played algorithm steps
pub const DEFAULT_PLAY_INTERVAL_MS: u64 = 1000;

/// How long the event loop waits for input before redrawing
pub const POLL_INTERVAL_MS: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub play_interval: Duration,
    pub poll_interval: Duration,
    /// Whether the data structure overview starts folded
    pub overview_collapsed: bool,
}

impl Config {
    pub fn with_play_interval_ms(mut self, millis: u64) -> Self {
        self.play_interval = Duration::from_millis(millis);
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            play_interval: Duration::from_millis(DEFAULT_PLAY_INTERVAL_MS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            overview_collapsed: false,
        }
    }
}

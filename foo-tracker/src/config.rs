//! Tracker configuration types
//!
//! This module defines the small amount of configuration a tracker carries.
//! Anything about how a demo run is scripted lives in the application layer.

use serde::{Deserialize, Serialize};

/// Configuration for a [`Tracker`](crate::Tracker)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Whether lifecycle events start out suppressed
    #[serde(default)]
    pub quiet: bool,
}

impl TrackerConfig {
    /// Create a new tracker configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: start with lifecycle events suppressed or not
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_config_builder() {
        let config = TrackerConfig::new().with_quiet(true);
        assert!(config.quiet);
    }

    #[test]
    fn test_defaults() {
        assert!(!TrackerConfig::new().quiet);
    }
}

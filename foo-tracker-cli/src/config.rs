//! Demo configuration loading and validation

use anyhow::{Context, Result};
use foo_tracker::labels::{ALPHABET_LEN, DEFAULT_FIRST_STEP, DEFAULT_SECOND_STEP};
use foo_tracker::{TrackerConfig, TrackerError, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main demo configuration (loaded from a TOML file)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DemoConfig {
    /// Range size of each phase, run in order
    #[serde(default = "default_phases")]
    pub phases: Vec<usize>,
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub labels: LabelsConfig,
    /// Report lifecycle events instead of suppressing them
    #[serde(default)]
    pub trace_lifecycle: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LabelsConfig {
    #[serde(default = "default_first_step")]
    pub first_step: u8,
    #[serde(default = "default_second_step")]
    pub second_step: u8,
}

fn default_phases() -> Vec<usize> {
    vec![15, 20]
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_first_step() -> u8 {
    DEFAULT_FIRST_STEP
}

fn default_second_step() -> u8 {
    DEFAULT_SECOND_STEP
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            first_step: default_first_step(),
            second_step: default_second_step(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            phases: default_phases(),
            separator: default_separator(),
            labels: LabelsConfig::default(),
            trace_lifecycle: false,
        }
    }
}

impl DemoConfig {
    /// Check that every phase and label setting is usable
    pub fn validate(&self) -> foo_tracker::Result<()> {
        if self.phases.is_empty() {
            return Err(TrackerError::InvalidConfig("no phases configured".to_string()));
        }
        if let Some(index) = self.phases.iter().position(|&size| size == 0) {
            return Err(TrackerError::InvalidConfig(format!(
                "phase {} has size 0",
                index + 1
            )));
        }
        for (name, step) in [
            ("first_step", self.labels.first_step),
            ("second_step", self.labels.second_step),
        ] {
            if step == 0 || step >= ALPHABET_LEN {
                return Err(TrackerError::InvalidConfig(format!(
                    "{} must be between 1 and {}, got {}",
                    name,
                    ALPHABET_LEN - 1,
                    step
                )));
            }
        }
        Ok(())
    }

    /// Tracker settings derived from this configuration
    pub fn tracker_config(&self) -> TrackerConfig {
        TrackerConfig::new().with_quiet(!self.trace_lifecycle)
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<DemoConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: DemoConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    config
        .validate()
        .with_context(|| format!("Invalid config file: {:?}", path))?;

    Ok(config)
}

//! Core types for the foo tracker library
//!
//! This module defines the identity type carried by every tracked value, the
//! lifecycle events a value can report, and the library error type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result type for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Identity of a tracked value slot
///
/// Serials are handed out by a [`Tracker`](crate::Tracker) starting at 1 and
/// are never reused, even after the value carrying one has been dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Serial(pub u64);

impl Serial {
    /// Get the raw serial number
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur while reporting or configuring
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Lifecycle events reported by a tracked value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// Explicit construction, with or without a label
    Constructed,
    /// Construction as a copy of another value
    CopyConstructed,
    /// The value went out of scope
    Destroyed,
    /// The receiver of an assignment, reported with its new identity
    Assigned,
    /// The receiver of an assignment, reported with its identity before the overwrite
    OverwrittenDuringAssign,
}

impl LifecycleEvent {
    /// Event name as it appears in the event line
    pub fn name(self) -> &'static str {
        match self {
            LifecycleEvent::Constructed => "c-tor",
            LifecycleEvent::CopyConstructed => "cp-c-tor",
            LifecycleEvent::Destroyed => "d-tor",
            LifecycleEvent::Assigned => "operator=",
            LifecycleEvent::OverwrittenDuringAssign => "overwritten during assign",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One reported lifecycle event, with the state of the value at that moment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleRecord {
    /// What happened
    pub event: LifecycleEvent,
    /// Serial of the value when the event was reported
    pub serial: Serial,
    /// Label of the value when the event was reported
    pub label: String,
}

impl LifecycleRecord {
    pub fn new(event: LifecycleEvent, serial: Serial, label: impl Into<String>) -> Self {
        Self {
            event,
            serial,
            label: label.into(),
        }
    }
}

impl fmt::Display for LifecycleRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "* {} - Foo S#: {}", self.event, self.serial)?;
        if !self.label.is_empty() {
            write!(f, " Tag: {}", self.label)?;
        }
        Ok(())
    }
}

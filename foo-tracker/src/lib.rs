//! Foo Tracker Library
//!
//! An instrumented value type for watching object lifetimes, plus a few range
//! algorithms exercised against it.
//!
//! # Architecture
//!
//! - [`Tracker`] owns the instrumentation state: the serial counter, the quiet
//!   flag and the [`EventSink`] receiving lifecycle events
//! - [`Foo`] is the tracked value: a serial identifying its slot and a label
//! - [`range`] holds print, bubble sort, reverse and binary search over slices
//!   of `Foo`
//! - [`labels`] generates deterministic two-letter labels
//!
//! The library does NOT script demo runs or produce reports; that lives in the
//! application layer (foo-tracker-cli).
//!
//! # Example Usage
//!
//! ```
//! use foo_tracker::{label_range, render, reverse, search, sort, LabelGenerator, RecordingSink, Tracker};
//!
//! let sink = RecordingSink::new();
//! let tracker = Tracker::with_sink(sink.clone());
//! tracker.suppress_output(true);
//!
//! let mut values = tracker.create_many(5);
//! label_range(&mut values, LabelGenerator::new());
//!
//! sort(&mut values);
//! reverse(&mut values);
//! sort(&mut values);
//!
//! assert!(search("ok", &values).is_some());
//! assert!(search("zz", &values).is_none());
//! assert!(render(&values, ", ").starts_with("[Foo #"));
//! assert!(sink.is_empty());
//! ```

// Public modules
pub mod config;
pub mod labels;
pub mod range;
pub mod sink;
pub mod types;

// Re-export main types for convenience
pub use config::TrackerConfig;
pub use foo::Foo;
pub use labels::{label_range, two_letter_labels, LabelGenerator};
pub use range::{print, render, reverse, search, search_mut, sort, SortStats, DEFAULT_SEPARATOR};
pub use sink::{EventSink, NullSink, RecordingSink, StdoutSink};
pub use tracker::Tracker;
pub use types::{LifecycleEvent, LifecycleRecord, Result, Serial, TrackerError};

// Internal modules (types re-exported above)
mod foo;
mod tracker;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Lifecycle tracker
//!
//! The tracker owns the instrumentation state shared by a family of tracked
//! values: the serial counter, the quiet flag and the event sink. Every
//! [`Foo`] keeps a handle to the tracker that created it, so two trackers
//! never observe each other's serials or events.

use crate::config::TrackerConfig;
use crate::foo::Foo;
use crate::sink::{EventSink, StdoutSink};
use crate::types::{LifecycleEvent, LifecycleRecord, Serial};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// State shared between a tracker and its values
pub(crate) struct TrackerState {
    /// Number of serials handed out so far
    count: Cell<u64>,
    quiet: Cell<bool>,
    sink: RefCell<Box<dyn EventSink>>,
}

impl TrackerState {
    /// Allocate the next serial; serials start at 1 and are never reused
    pub(crate) fn next_serial(&self) -> Serial {
        let next = self.count.get() + 1;
        self.count.set(next);
        Serial(next)
    }

    /// Report an event for a value unless output is suppressed
    pub(crate) fn report(&self, event: LifecycleEvent, serial: Serial, label: &str) {
        if self.quiet.get() {
            return;
        }

        let record = LifecycleRecord::new(event, serial, label);
        log::trace!("{}", record);
        self.sink.borrow_mut().record(&record);
    }
}

/// Owning context for tracked values
///
/// Cloning a tracker yields another handle to the same state.
///
/// # Example
/// ```
/// use foo_tracker::{RecordingSink, Tracker};
///
/// let sink = RecordingSink::new();
/// let tracker = Tracker::with_sink(sink.clone());
///
/// let first = tracker.create("aa");
/// let second = first.clone();
/// assert_ne!(first.serial(), second.serial());
/// assert_eq!(first.label(), second.label());
/// assert_eq!(sink.len(), 2);
/// ```
#[derive(Clone)]
pub struct Tracker {
    state: Rc<TrackerState>,
}

impl Tracker {
    /// Create a new tracker reporting to standard output
    pub fn new() -> Self {
        Self::with_sink(StdoutSink)
    }

    /// Create a new tracker reporting to the given sink
    pub fn with_sink(sink: impl EventSink + 'static) -> Self {
        let sink: Box<dyn EventSink> = Box::new(sink);
        Self {
            state: Rc::new(TrackerState {
                count: Cell::new(0),
                quiet: Cell::new(false),
                sink: RefCell::new(sink),
            }),
        }
    }

    /// Create a new tracker from a configuration, reporting to the given sink
    pub fn from_config(config: &TrackerConfig, sink: impl EventSink + 'static) -> Self {
        let tracker = Self::with_sink(sink);
        tracker.suppress_output(config.quiet);
        tracker
    }

    /// Create a tracked value with the given label
    pub fn create(&self, label: impl Into<String>) -> Foo {
        Foo::new(self, label)
    }

    /// Create `count` unlabelled tracked values
    pub fn create_many(&self, count: usize) -> Vec<Foo> {
        (0..count).map(|_| self.create("")).collect()
    }

    /// Turn lifecycle reporting off (`true`) or back on (`false`)
    ///
    /// Applies to every value of this tracker, current and future.
    pub fn suppress_output(&self, setting: bool) {
        log::debug!("Lifecycle output {}", if setting { "suppressed" } else { "enabled" });
        self.state.quiet.set(setting);
    }

    /// Check whether lifecycle reporting is currently suppressed
    pub fn is_quiet(&self) -> bool {
        self.state.quiet.get()
    }

    /// Number of serials handed out so far
    pub fn created(&self) -> u64 {
        self.state.count.get()
    }

    pub(crate) fn state(&self) -> &Rc<TrackerState> {
        &self.state
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tracker")
            .field("created", &self.created())
            .field("quiet", &self.is_quiet())
            .finish()
    }
}

//! Lifecycle event sinks
//!
//! A tracker hands every reported [`LifecycleRecord`] to exactly one sink.
//! Each implementation decides where the event line ends up.

use crate::types::LifecycleRecord;
use std::cell::RefCell;
use std::rc::Rc;

/// Common trait for everything that can receive lifecycle events
pub trait EventSink {
    /// Receive one lifecycle event
    fn record(&mut self, record: &LifecycleRecord);
}

/// Writes each event line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn record(&mut self, record: &LifecycleRecord) {
        println!("{}", record);
    }
}

/// Drops every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _record: &LifecycleRecord) {}
}

/// Keeps every event in memory
///
/// Clones share the same buffer, so a handle kept by the caller sees what the
/// tracker recorded through its own copy.
///
/// # Example
/// ```
/// use foo_tracker::{RecordingSink, Tracker};
///
/// let sink = RecordingSink::new();
/// let tracker = Tracker::with_sink(sink.clone());
/// let _value = tracker.create("hf");
/// assert_eq!(sink.lines(), vec!["* c-tor - Foo S#: 1 Tag: hf"]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<LifecycleRecord>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every record received so far
    pub fn records(&self) -> Vec<LifecycleRecord> {
        self.records.borrow().clone()
    }

    /// Every record received so far, rendered as event lines
    pub fn lines(&self) -> Vec<String> {
        self.records.borrow().iter().map(ToString::to_string).collect()
    }

    /// Remove and return every record received so far
    pub fn take(&self) -> Vec<LifecycleRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl EventSink for RecordingSink {
    fn record(&mut self, record: &LifecycleRecord) {
        self.records.borrow_mut().push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LifecycleEvent, Serial};

    #[test]
    fn test_recording_sink_shares_buffer() {
        let handle = RecordingSink::new();
        let mut sink = handle.clone();

        sink.record(&LifecycleRecord::new(LifecycleEvent::Constructed, Serial(1), ""));
        sink.record(&LifecycleRecord::new(LifecycleEvent::Destroyed, Serial(1), "aa"));

        assert_eq!(handle.len(), 2);
        assert_eq!(
            handle.lines(),
            vec!["* c-tor - Foo S#: 1", "* d-tor - Foo S#: 1 Tag: aa"]
        );
    }

    #[test]
    fn test_take_empties_buffer() {
        let handle = RecordingSink::new();
        let mut sink = handle.clone();
        sink.record(&LifecycleRecord::new(LifecycleEvent::Assigned, Serial(4), "ok"));

        let taken = handle.take();
        assert_eq!(taken.len(), 1);
        assert_eq!(taken[0].event, LifecycleEvent::Assigned);
        assert!(handle.is_empty());
    }
}

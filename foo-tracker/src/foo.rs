//! The tracked value type
//!
//! `Foo` reports whenever it is constructed, copied, assigned or dropped, and
//! carries a serial number identifying the slot it occupies. Copies and
//! assignments never carry the serial over: the receiving value always gets a
//! fresh one from its tracker, only the label travels.

use crate::tracker::{Tracker, TrackerState};
use crate::types::{LifecycleEvent, Serial};
use std::fmt;
use std::rc::Rc;

/// A labelled value that reports its own lifecycle
pub struct Foo {
    serial: Serial,
    label: String,
    tracker: Rc<TrackerState>,
}

impl Foo {
    /// Create a value with the given label, reporting `c-tor`
    pub fn new(tracker: &Tracker, label: impl Into<String>) -> Self {
        let state = Rc::clone(tracker.state());
        let foo = Self {
            serial: state.next_serial(),
            label: label.into(),
            tracker: state,
        };
        foo.report(LifecycleEvent::Constructed);
        foo
    }

    /// Serial number of this value
    pub fn serial(&self) -> Serial {
        self.serial
    }

    /// Label of this value (empty by default)
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Change the label; reports nothing
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Overwrite this value with a copy of `other`
    ///
    /// Reports `overwritten during assign` with the current state, then takes
    /// a new serial from this value's tracker, copies the label and reports
    /// `operator=`. Returns `self` so assignments can be chained.
    pub fn assign(&mut self, other: &Foo) -> &mut Self {
        self.report(LifecycleEvent::OverwrittenDuringAssign);
        self.copy_from(other, LifecycleEvent::Assigned);
        self
    }

    fn copy_from(&mut self, other: &Foo, event: LifecycleEvent) {
        self.serial = self.tracker.next_serial();
        self.label.clone_from(&other.label);
        self.report(event);
    }

    fn report(&self, event: LifecycleEvent) {
        self.tracker.report(event, self.serial, &self.label);
    }
}

impl Clone for Foo {
    /// Copy construction: fresh serial, same label, reports `cp-c-tor`
    fn clone(&self) -> Self {
        let foo = Self {
            serial: self.tracker.next_serial(),
            label: self.label.clone(),
            tracker: Rc::clone(&self.tracker),
        };
        foo.report(LifecycleEvent::CopyConstructed);
        foo
    }

    /// Same as [`Foo::assign`]
    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl Drop for Foo {
    fn drop(&mut self) {
        self.report(LifecycleEvent::Destroyed);
    }
}

impl fmt::Display for Foo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Foo #{}", self.serial)?;
        if !self.label.is_empty() {
            write!(f, " tag: \"{}\"", self.label)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for Foo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Foo")
            .field("serial", &self.serial)
            .field("label", &self.label)
            .finish()
    }
}

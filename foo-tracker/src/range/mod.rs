//! Range algorithms over contiguous sequences of tracked values
//!
//! Every algorithm borrows a slice and never resizes it. Empty slices are
//! accepted everywhere and leave the range untouched.

use crate::foo::Foo;

pub mod print;
pub mod reverse;
pub mod search;
pub mod sort;

// Re-export the algorithms
pub use print::{print, render};
pub use reverse::reverse;
pub use search::{search, search_mut};
pub use sort::{sort, SortStats};

/// Separator placed between values by default when a range is printed
pub const DEFAULT_SEPARATOR: &str = ", ";

/// Swap two values the way a copy-assign swap does
///
/// Copies `range[a]` into a temporary, assigns `range[b]` over `range[a]`,
/// then assigns the temporary over `range[b]`. Both slots end up with fresh
/// serials and the full copy/assign/drop event stream is reported.
pub(crate) fn swap_by_copy(range: &mut [Foo], a: usize, b: usize) {
    debug_assert!(a < b && b < range.len(), "swap indices out of order");

    let (left, right) = range.split_at_mut(b);
    let temp = left[a].clone();
    left[a].assign(&right[0]);
    right[0].assign(&temp);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;
    use crate::types::LifecycleEvent;
    use crate::Tracker;

    #[test]
    fn test_swap_by_copy_event_stream() {
        let sink = RecordingSink::new();
        let tracker = Tracker::with_sink(sink.clone());
        let mut values = vec![tracker.create("ok"), tracker.create("aa")];
        sink.take();

        swap_by_copy(&mut values, 0, 1);

        assert_eq!(values[0].label(), "aa");
        assert_eq!(values[1].label(), "ok");

        let events: Vec<_> = sink.records().into_iter().map(|r| r.event).collect();
        assert_eq!(
            events,
            vec![
                LifecycleEvent::CopyConstructed,
                LifecycleEvent::OverwrittenDuringAssign,
                LifecycleEvent::Assigned,
                LifecycleEvent::OverwrittenDuringAssign,
                LifecycleEvent::Assigned,
                LifecycleEvent::Destroyed,
            ]
        );
    }
}

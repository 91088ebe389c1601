//! Bubble sort by label

use super::swap_by_copy;
use crate::foo::Foo;

/// Summary of one [`sort`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of passes over the range, including the final pass without swaps
    pub passes: usize,
    /// Number of adjacent swaps performed
    pub swaps: usize,
}

/// Sort `range` in place, ascending by label
///
/// Classic bubble sort: each pass compares adjacent values and swaps them only
/// when the earlier label is strictly greater, so equal labels keep their
/// relative order. The tail is sorted after every pass, so the scanned bound
/// shrinks by one each time. Stops after a pass with no swaps.
///
/// Swaps go through a copy and two assignments, so every swap is visible in
/// the tracker's event stream.
pub fn sort(range: &mut [Foo]) -> SortStats {
    let mut stats = SortStats::default();
    if range.len() < 2 {
        return stats;
    }

    // Number of adjacent comparisons in the current pass
    let mut bound = range.len() - 1;
    loop {
        let mut did_swap = false;
        for current in 0..bound {
            if range[current].label() > range[current + 1].label() {
                swap_by_copy(range, current, current + 1);
                stats.swaps += 1;
                did_swap = true;
            }
        }
        stats.passes += 1;

        if !did_swap {
            break;
        }
        bound -= 1;
    }

    log::debug!(
        "Sorted {} values in {} passes ({} swaps)",
        range.len(),
        stats.passes,
        stats.swaps
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, RecordingSink};
    use crate::Tracker;

    fn labelled(tracker: &Tracker, labels: &[&str]) -> Vec<Foo> {
        labels.iter().map(|label| tracker.create(*label)).collect()
    }

    fn labels(values: &[Foo]) -> Vec<&str> {
        values.iter().map(Foo::label).collect()
    }

    #[test]
    fn test_sort_ascending() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["vp", "aa", "ok", "hf", "cu"]);

        sort(&mut values);

        assert_eq!(labels(&values), vec!["aa", "cu", "hf", "ok", "vp"]);
    }

    #[test]
    fn test_sort_already_sorted_single_pass() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["aa", "bb", "cc"]);

        let stats = sort(&mut values);

        assert_eq!(stats, SortStats { passes: 1, swaps: 0 });
    }

    #[test]
    fn test_sort_reverse_ordered_worst_case() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["d", "c", "b", "a"]);

        let stats = sort(&mut values);

        assert_eq!(labels(&values), vec!["a", "b", "c", "d"]);
        assert_eq!(stats.swaps, 6);
        assert_eq!(stats.passes, 4);
    }

    #[test]
    fn test_sort_never_swaps_equal_labels() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["ok", "ok", "ok"]);
        let serials: Vec<_> = values.iter().map(Foo::serial).collect();

        let stats = sort(&mut values);

        assert_eq!(stats.swaps, 0);
        assert_eq!(values.iter().map(Foo::serial).collect::<Vec<_>>(), serials);
    }

    #[test]
    fn test_sort_bytewise_order() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["b", "B", "", "ab", "a"]);

        sort(&mut values);

        assert_eq!(labels(&values), vec!["", "B", "a", "ab", "b"]);
    }

    #[test]
    fn test_sort_empty_and_single() {
        let tracker = Tracker::with_sink(NullSink);
        let mut empty: Vec<Foo> = Vec::new();
        assert_eq!(sort(&mut empty), SortStats::default());

        let mut single = labelled(&tracker, &["zz"]);
        let serial = single[0].serial();
        assert_eq!(sort(&mut single), SortStats::default());
        assert_eq!(single[0].serial(), serial);
    }

    #[test]
    fn test_sort_sub_range() {
        let tracker = Tracker::with_sink(NullSink);
        let mut values = labelled(&tracker, &["z", "c", "b", "a", "y"]);

        sort(&mut values[1..4]);

        assert_eq!(labels(&values), vec!["z", "a", "b", "c", "y"]);
    }

    #[test]
    fn test_sort_event_count_per_swap() {
        let sink = RecordingSink::new();
        let tracker = Tracker::with_sink(sink.clone());
        let mut values = labelled(&tracker, &["b", "a"]);
        sink.take();

        let stats = sort(&mut values);

        // copy, 2 x (overwrite + assign), drop of the temporary
        assert_eq!(stats.swaps, 1);
        assert_eq!(sink.len(), 6);
    }
}

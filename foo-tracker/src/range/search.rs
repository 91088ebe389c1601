//! Binary search by label

use crate::foo::Foo;
use std::cmp::Ordering;

/// Find a value labelled `target` in a range sorted ascending by label
///
/// Returns `None` when no value matches. With duplicate labels, the first
/// match hit while bisecting is returned, not necessarily the leftmost one.
/// The range must already be sorted; on unsorted input the result is
/// unspecified but the call still terminates.
///
/// # Example
/// ```
/// use foo_tracker::{search, sort, NullSink, Tracker};
///
/// let tracker = Tracker::with_sink(NullSink);
/// let mut values: Vec<_> = ["ok", "aa", "hf"].iter().map(|l| tracker.create(*l)).collect();
/// sort(&mut values);
///
/// assert_eq!(search("hf", &values).map(|v| v.label()), Some("hf"));
/// assert!(search("zz", &values).is_none());
/// ```
pub fn search<'a>(target: &str, range: &'a [Foo]) -> Option<&'a Foo> {
    let index = search_index(target, range)?;
    Some(&range[index])
}

/// Same as [`search`], but hands back a mutable reference
pub fn search_mut<'a>(target: &str, range: &'a mut [Foo]) -> Option<&'a mut Foo> {
    let index = search_index(target, range)?;
    Some(&mut range[index])
}

fn search_index(target: &str, range: &[Foo]) -> Option<usize> {
    // Half-open window [begin, end)
    let mut begin = 0;
    let mut end = range.len();

    while begin != end {
        let mid = begin + (end - begin) / 2;
        match target.cmp(range[mid].label()) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => end = mid,
            Ordering::Greater => begin = mid + 1,
        }
    }
    None
}

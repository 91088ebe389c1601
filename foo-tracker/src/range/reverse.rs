//! In-place reversal

use super::swap_by_copy;
use crate::foo::Foo;

/// Reverse `range` in place
///
/// Swaps symmetric pairs from both ends toward the middle; the middle value
/// of an odd-length range is left alone.
pub fn reverse(range: &mut [Foo]) {
    if range.is_empty() {
        return;
    }

    let mut front = 0;
    let mut back = range.len() - 1;
    while front < back {
        swap_by_copy(range, front, back);
        front += 1;
        back -= 1;
    }
}

//! Deterministic label generation
//!
//! Two-letter lowercase labels used to populate demo ranges. The generator
//! walks each letter position around the alphabet with its own step, so the
//! produced sequence is scrambled but fully reproducible.

use crate::foo::Foo;

/// Number of letters a label position cycles through
pub const ALPHABET_LEN: u8 = 26;

/// Default step for the first letter
pub const DEFAULT_FIRST_STEP: u8 = 7;

/// Default step for the second letter
pub const DEFAULT_SECOND_STEP: u8 = 5;

/// Infinite iterator of two-letter labels
///
/// Both letters start at `a`; after each label the first letter advances by
/// `first_step` and the second by `second_step`, wrapping around the alphabet.
///
/// # Example
/// ```
/// use foo_tracker::LabelGenerator;
///
/// let labels: Vec<String> = LabelGenerator::new().take(5).collect();
/// assert_eq!(labels, vec!["aa", "hf", "ok", "vp", "cu"]);
/// ```
#[derive(Debug, Clone)]
pub struct LabelGenerator {
    first: u8,
    second: u8,
    first_step: u8,
    second_step: u8,
}

impl LabelGenerator {
    /// Create a generator with the default steps (7 and 5)
    pub fn new() -> Self {
        Self::with_steps(DEFAULT_FIRST_STEP, DEFAULT_SECOND_STEP)
    }

    /// Create a generator with custom steps (taken modulo 26)
    pub fn with_steps(first_step: u8, second_step: u8) -> Self {
        Self {
            first: 0,
            second: 0,
            first_step: first_step % ALPHABET_LEN,
            second_step: second_step % ALPHABET_LEN,
        }
    }
}

impl Default for LabelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for LabelGenerator {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let label = two_letter(self.first, self.second);
        self.first = (self.first + self.first_step) % ALPHABET_LEN;
        self.second = (self.second + self.second_step) % ALPHABET_LEN;
        Some(label)
    }
}

fn two_letter(first: u8, second: u8) -> String {
    [char::from(b'a' + first), char::from(b'a' + second)]
        .iter()
        .collect()
}

/// Give every value of `range` the next label from `labels`
///
/// Labels are set with [`Foo::set_label`], so nothing is reported. Stops
/// early if `labels` runs out.
pub fn label_range<I>(range: &mut [Foo], labels: I)
where
    I: IntoIterator<Item = String>,
{
    for (value, label) in range.iter_mut().zip(labels) {
        value.set_label(label);
    }
}

/// Every two-letter lowercase label, `aa` through `zz`, in ascending order
pub fn two_letter_labels() -> impl Iterator<Item = String> {
    (0..ALPHABET_LEN).flat_map(|first| (0..ALPHABET_LEN).map(move |second| two_letter(first, second)))
}

//! Printing a range of tracked values

use crate::foo::Foo;
use crate::types::Result;
use std::io::Write;

/// Write every value of `range` to `sink`, joined by `separator`
///
/// No separator follows the last value. The range is not modified.
///
/// # Example
/// ```
/// use foo_tracker::{print, NullSink, Tracker, DEFAULT_SEPARATOR};
///
/// let tracker = Tracker::with_sink(NullSink);
/// let values = vec![tracker.create("aa"), tracker.create("")];
///
/// let mut out = Vec::new();
/// print(&values, DEFAULT_SEPARATOR, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "[Foo #1 tag: \"aa\"], [Foo #2]");
/// ```
pub fn print<W: Write + ?Sized>(range: &[Foo], separator: &str, sink: &mut W) -> Result<()> {
    let mut values = range.iter().peekable();
    while let Some(value) = values.next() {
        write!(sink, "{}", value)?;
        if values.peek().is_some() {
            sink.write_all(separator.as_bytes())?;
        }
    }
    Ok(())
}

/// Format every value of `range` into a string, joined by `separator`
pub fn render(range: &[Foo], separator: &str) -> String {
    range
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{NullSink, RecordingSink};
    use crate::Tracker;
    use std::io;

    #[test]
    fn test_print_custom_separator() {
        let tracker = Tracker::with_sink(NullSink);
        let values = vec![tracker.create("aa"), tracker.create("hf"), tracker.create("ok")];

        let mut out = Vec::new();
        print(&values, " | ", &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Foo #1 tag: \"aa\"] | [Foo #2 tag: \"hf\"] | [Foo #3 tag: \"ok\"]"
        );
    }

    #[test]
    fn test_print_single_value_has_no_separator() {
        let tracker = Tracker::with_sink(NullSink);
        let values = vec![tracker.create("")];

        let mut out = Vec::new();
        print(&values, ", ", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "[Foo #1]");
    }

    #[test]
    fn test_print_empty_range() {
        let mut out = Vec::new();
        print(&[], ", ", &mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(render(&[], ", "), "");
    }

    #[test]
    fn test_print_reports_no_events() {
        let sink = RecordingSink::new();
        let tracker = Tracker::with_sink(sink.clone());
        let values = tracker.create_many(4);
        sink.take();

        print(&values, ", ", &mut io::sink()).unwrap();

        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_matches_print() {
        let tracker = Tracker::with_sink(NullSink);
        let values = vec![tracker.create("vp"), tracker.create("cu")];

        let mut out = Vec::new();
        print(&values, "\n", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), render(&values, "\n"));
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_surfaces_write_errors() {
        let tracker = Tracker::with_sink(NullSink);
        let values = vec![tracker.create("aa")];

        let result = print(&values, ", ", &mut FailingWriter);

        assert!(matches!(result, Err(crate::TrackerError::Io(_))));
    }
}

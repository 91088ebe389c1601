//! Phase reports
//!
//! Collects the outcome of each demo phase in a serializable form so a run can
//! be emitted as JSON instead of the text transcript.

use anyhow::Result;
use foo_tracker::Foo;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Labels observed after each step of one demo phase
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseReport {
    pub size: usize,
    pub original: Vec<String>,
    pub sorted: Vec<String>,
    pub reversed: Vec<String>,
    pub resorted: Vec<String>,
    /// Every two-letter label the search found, in ascending order
    pub found: Vec<String>,
    /// Serials handed out by the tracker by the end of the phase
    pub serials_issued: u64,
}

/// Labels of a range, in order
pub fn snapshot(range: &[Foo]) -> Vec<String> {
    range.iter().map(|value| value.label().to_string()).collect()
}

/// Write every report as a pretty-printed JSON array
pub fn write_json(reports: &[PhaseReport], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, reports)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_json() {
        let report = PhaseReport {
            size: 2,
            original: vec!["hf".into(), "aa".into()],
            sorted: vec!["aa".into(), "hf".into()],
            found: vec!["aa".into(), "hf".into()],
            ..PhaseReport::default()
        };

        let mut out = Vec::new();
        write_json(&[report.clone()], &mut out).unwrap();

        let parsed: Vec<PhaseReport> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![report]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"found\""));
        assert!(text.ends_with("]\n"));
    }
}

//! Scripted demo run
//!
//! Each phase fills a range with labelled values, then prints it original,
//! sorted, reversed and re-sorted, and finally reports every two-letter label
//! the binary search can find.

use crate::config::DemoConfig;
use crate::report::{snapshot, PhaseReport};
use anyhow::Result;
use foo_tracker::{
    label_range, print, reverse, search, sort, two_letter_labels, EventSink, Foo,
    LabelGenerator, Tracker,
};
use std::io::Write;

/// Run every configured phase, writing the transcript to `out`
pub fn run<S>(config: &DemoConfig, sink: S, out: &mut dyn Write) -> Result<Vec<PhaseReport>>
where
    S: EventSink + 'static,
{
    let tracker = Tracker::from_config(&config.tracker_config(), sink);

    let mut reports = Vec::with_capacity(config.phases.len());
    for (index, &size) in config.phases.iter().enumerate() {
        log::info!("Phase {}: {} values", index + 1, size);
        reports.push(run_phase(&tracker, size, config, out)?);
    }

    log::debug!("Demo finished, {} serials issued", tracker.created());
    Ok(reports)
}

/// Run a single phase; every value created here is dropped before returning
fn run_phase(
    tracker: &Tracker,
    size: usize,
    config: &DemoConfig,
    out: &mut dyn Write,
) -> Result<PhaseReport> {
    let mut values = tracker.create_many(size);
    label_range(
        &mut values,
        LabelGenerator::with_steps(config.labels.first_step, config.labels.second_step),
    );

    let mut report = PhaseReport {
        size,
        original: snapshot(&values),
        ..PhaseReport::default()
    };
    write_section(out, "Original values:", &values, &config.separator)?;

    sort(&mut values);
    report.sorted = snapshot(&values);
    write_section(out, "Sorted values:", &values, &config.separator)?;

    reverse(&mut values);
    report.reversed = snapshot(&values);
    write_section(out, "Reversed values:", &values, &config.separator)?;

    let stats = sort(&mut values);
    log::debug!("Re-sort took {} passes", stats.passes);
    report.resorted = snapshot(&values);
    write_section(out, "Re-Sorted values (after reverse):", &values, &config.separator)?;

    for target in two_letter_labels() {
        if search(&target, &values).is_some() {
            writeln!(out, "Found {}", target)?;
            report.found.push(target);
        }
    }
    writeln!(out)?;
    out.flush()?;

    drop(values);
    report.serials_issued = tracker.created();
    Ok(report)
}

fn write_section(out: &mut dyn Write, title: &str, values: &[Foo], separator: &str) -> Result<()> {
    writeln!(out, "{} ", title)?;
    print(values, separator, &mut *out)?;
    write!(out, "\n\n")?;
    Ok(())
}

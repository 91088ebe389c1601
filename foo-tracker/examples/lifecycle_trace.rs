//! Shows the lifecycle event stream produced while sorting a small range
//!
//! Usage:
//!   cargo run --example lifecycle_trace [count]
//!
//! Run with `RUST_LOG=debug` to also see the sort summary.

use foo_tracker::{label_range, print, sort, LabelGenerator, Tracker, DEFAULT_SEPARATOR};
use std::env;
use std::io;

fn main() -> foo_tracker::Result<()> {
    env_logger::init();

    let count = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<usize>().ok())
        .unwrap_or(4);

    let tracker = Tracker::new();

    println!("=== Construction ===");
    let mut values = tracker.create_many(count);
    label_range(&mut values, LabelGenerator::new());

    println!("\n=== Sorting ===");
    let stats = sort(&mut values);

    println!("\n=== Result ===");
    tracker.suppress_output(true);
    print(&values, DEFAULT_SEPARATOR, &mut io::stdout())?;
    println!();
    println!("{} passes, {} swaps, {} serials issued", stats.passes, stats.swaps, tracker.created());

    println!("\n=== Destruction ===");
    tracker.suppress_output(false);
    drop(values);

    Ok(())
}

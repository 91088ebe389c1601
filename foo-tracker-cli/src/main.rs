//! Foo Tracker CLI Application
//!
//! This is the demonstration driver for the foo-tracker library.
//! It uses the library and adds:
//! - The scripted two-phase demo (print, sort, reverse, re-sort, search)
//! - TOML configuration for phase sizes, label steps and separator
//! - JSON phase reports

use anyhow::Result;
use clap::Parser;
use foo_tracker::{NullSink, StdoutSink};
use std::io;
use std::path::PathBuf;

mod config;
mod demo;
mod report;

/// Foo Tracker - Watch tracked values through sort, reverse and search
#[derive(Parser, Debug)]
#[command(name = "foo-tracker-cli")]
#[command(about = "Run the tracked value range algorithm demo", long_about = None)]
#[command(version)]
struct Args {
    /// Path to configuration file (demo.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Range size of a phase (can be repeated; replaces the configured phases)
    #[arg(long = "size", value_name = "COUNT")]
    sizes: Vec<usize>,

    /// Report construction, copy, assignment and destruction of every value
    #[arg(long)]
    trace_lifecycle: bool,

    /// Print phase reports as JSON instead of the text transcript
    #[arg(long)]
    json: bool,

    /// Verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::info!("Foo Tracker CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using tracker library v{}", foo_tracker::VERSION);

    let mut demo_config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => config::DemoConfig::default(),
    };

    // Command line flags override the file
    if !args.sizes.is_empty() {
        demo_config.phases = args.sizes.clone();
    }
    if args.trace_lifecycle {
        demo_config.trace_lifecycle = true;
    }
    demo_config.validate()?;
    log::debug!("Demo configuration: {:?}", demo_config);

    let mut stdout = io::stdout();
    if args.json {
        // Lifecycle lines would corrupt the JSON document
        let reports = demo::run(&demo_config, NullSink, &mut io::sink())?;
        report::write_json(&reports, &mut stdout)?;
    } else {
        demo::run(&demo_config, StdoutSink, &mut stdout)?;
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

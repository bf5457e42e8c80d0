//! Command-line interface for linecat.
//!
//! Scans the current directory with the built-in extension and exclusion
//! lists, prints every matching file and finishes with the total line count.

use clap::Parser;
use linecat::{ScanOptions, scan_to};
use std::io;
use std::process::exit;

/// linecat — concatenate web and Python sources under the current directory
#[derive(Parser)]
#[command(name = "linecat", version, about, long_about = None)]
struct Cli {}

#[cfg(feature = "logging")]
fn init_logging() {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to install logger: {}", e);
    }
}

fn main() {
    let _cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if let Err(e) = scan_to(ScanOptions::default(), &mut handle) {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

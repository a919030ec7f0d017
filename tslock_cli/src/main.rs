//! Tristate logic-locking CLI
//!
//! Feeds random (or fixed) 8-bit vectors through a single locked gate under
//! every key combination and prints what the gate does with each one.

mod args;

use clap::Parser;
use tracing::info;
use tslock_gate::{DEFAULT_WIDTH, Harness};

use args::{Args, FormatArg};

/// Executes the trial sweep.
///
/// This function:
/// 1. Initializes logging (stderr, filtered by `RUST_LOG`)
/// 2. Parses command-line arguments
/// 3. Runs every trial through one gate
/// 4. Writes the reports to stdout
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    info!("Running {} trials", config.trial_count());

    let trials = Harness::<DEFAULT_WIDTH>::new(&config)?.run();

    match args.format {
        FormatArg::Text => {
            for trial in &trials {
                print!("{trial}");
            }
        },
        FormatArg::Json => println!("{}", serde_json::to_string_pretty(&trials)?),
    }

    Ok(())
}

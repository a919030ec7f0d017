use clap::Parser;
use tslock_gate::{Byte, DEFAULT_TRIALS, HarnessConfig};

/// Tristate key logic-locking simulation
#[derive(Parser, Debug)]
#[command(name = "tslock")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of random input vectors to sweep
    #[arg(short = 'n', long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Seed for the input generator (random when omitted)
    #[arg(short = 's', long)]
    pub seed: Option<u64>,

    /// Fixed 8-bit input in binary, e.g. 00101101 (repeatable; replaces random inputs)
    #[arg(short = 'i', long = "input")]
    pub inputs: Vec<Byte>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: FormatArg,
}

impl Args {
    /// Convert command-line arguments into a harness configuration
    pub fn to_config(&self) -> HarnessConfig {
        HarnessConfig::builder()
            .trials(self.trials)
            .seed(self.seed)
            .inputs(self.inputs.iter().map(|b| b.value()))
            .build()
    }
}

/// How trial results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FormatArg {
    /// Reference text layout
    #[value(name = "text")]
    Text,
    /// JSON array of trials
    #[value(name = "json")]
    Json,
}

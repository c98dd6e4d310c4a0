use clap::Args;
use std::path::PathBuf;

/// Arguments shared by every mode
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Write output to this file instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Extra settings file layered over the defaults
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Suppress informational notices
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, default_value = "104857600")]
    pub max_size: usize,

    /// Process files exceeding --max-size limit
    #[arg(long)]
    pub force: bool,
}

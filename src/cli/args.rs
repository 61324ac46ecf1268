use clap::Parser;
use std::path::PathBuf;

/// Interactive navigator for multi-step analysis pipelines
#[derive(Parser, Debug)]
#[command(name = "navigator")]
#[command(about = "navigator - Step through an analysis pipeline interactively", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Analysis config file (YAML)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Where to keep the command history (overrides `history_file` in the config)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

use clap::Parser;
use std::path::PathBuf;
use tx_sync_config::DEFAULT_CONFIG_PATH;

#[derive(Parser, Debug)]
#[command(name = "tx-pr-sync")]
#[command(
    about = "Pull translation updates from Transifex and publish them as a GitHub pull request",
    long_about = None
)]
#[command(after_help = "Without an existing working copy the repository is set up first, \
as if --setup had been given, and the sync continues afterwards.")]
pub struct Args {
    /// Configuration file to use
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Clone and configure the working copy, then exit
    #[arg(long)]
    pub setup: bool,

    /// Log every command and its output
    #[arg(short, long)]
    pub verbose: bool,
}

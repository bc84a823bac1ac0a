use clap::Parser;
use log::{error, info};
use std::process::ExitCode;

mod bootstrap;
mod cli;
mod error;
mod git;
mod locator;
mod logger;
mod manifest;
mod pipeline;
mod process;
mod publish;
mod sync;
#[cfg(test)]
mod testing;
mod transifex;

use cli::Args;
use error::{Result, SyncError};
use gh_client::OctocrabClient;
use pipeline::{Outcome, Pipeline, PublishedPullRequest, RunOptions};
use process::SystemRunner;
use tx_sync_config::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose);

    match run(args).await {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{:?}", anyhow::Error::from(err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<Outcome> {
    info!("Loading configuration from {}", args.config.display());
    let settings = Settings::load(&args.config)?;

    let github = OctocrabClient::with_basic_auth(&settings.github.user, &settings.github.password)
        .map_err(SyncError::Api)?;
    let runner = SystemRunner;

    Pipeline::new(&settings, &runner, &github)
        .run(RunOptions {
            setup_only: args.setup,
        })
        .await
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::SetupOnly => info!("Setup finished"),
        Outcome::NoChanges => info!("Translations are up to date"),
        Outcome::Published {
            langcount,
            pull_request,
        } => match pull_request {
            PublishedPullRequest::Existing(pr) => {
                info!("Updated PR #{} with {} translations", pr.number, langcount)
            }
            PublishedPullRequest::Created(pr) => {
                info!("Opened PR #{} with {} translations", pr.number, langcount)
            }
        },
    }
}

//! One sync run from start to finish
//!
//! ```text
//! setup? ──► find open PR ──► reset to baseline ──► tx pull
//!                                                      │
//!   open PR (if none) ◄── commit + push ◄── changed? ◄─┴─ manifests
//! ```
//!
//! Every step either succeeds or ends the run. Nothing is rolled back: a
//! failed push leaves the local commit in place for the next run to redo.

use gh_client::{GitHubClient, PullRequestRef};
use log::info;
use tx_sync_config::Settings;

use crate::bootstrap;
use crate::error::Result;
use crate::git::Git;
use crate::locator;
use crate::manifest;
use crate::process::CommandRunner;
use crate::publish;
use crate::sync::{self, Baseline};
use crate::transifex::Transifex;

/// Options taken from the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Only set up the working copy, then stop
    pub setup_only: bool,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// `--setup` was given and the working copy was set up
    SetupOnly,
    /// The pull produced nothing new; nothing was committed
    NoChanges,
    /// A commit was pushed
    Published {
        /// Number of files in the combined translation list
        langcount: usize,
        pull_request: PublishedPullRequest,
    },
}

/// The pull request carrying the pushed commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishedPullRequest {
    /// Already open; the push updated it
    Existing(PullRequestRef),
    /// Opened by this run
    Created(PullRequestRef),
}

pub struct Pipeline<'a> {
    settings: &'a Settings,
    runner: &'a dyn CommandRunner,
    github: &'a dyn GitHubClient,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        settings: &'a Settings,
        runner: &'a dyn CommandRunner,
        github: &'a dyn GitHubClient,
    ) -> Self {
        Self {
            settings,
            runner,
            github,
        }
    }

    pub async fn run(&self, options: RunOptions) -> Result<Outcome> {
        let settings = self.settings;

        if bootstrap::needs_setup(settings, options.setup_only) {
            bootstrap::bootstrap(self.runner, settings).await?;
            if options.setup_only {
                return Ok(Outcome::SetupOnly);
            }
        }

        info!("Checking for pending PR");
        let existing =
            locator::find_open_pull_request(self.github, &settings.github.user, &settings.target_repo)
                .await?;
        match &existing {
            Some(pr) => info!("Already have pending PR #{}", pr.number),
            None => info!("No pending PR, will be creating a new one"),
        }

        let workdir = &settings.working_repo.path;
        let git = Git::new(self.runner, workdir);
        let baseline = Baseline::choose(existing.as_ref(), settings);
        sync::reset_to_baseline(&git, &baseline).await?;

        let tx = Transifex::new(self.runner, workdir);
        let pull_output = sync::pull_translations(&tx, &settings.transifex).await?;

        let files = manifest::regenerate(&git, settings, &pull_output).await?;

        if !publish::has_changes(&git).await? {
            info!("No changes to translations, done");
            return Ok(Outcome::NoChanges);
        }

        info!("Things changed & force pushing");
        publish::commit_and_push(&git, settings, files.len()).await?;

        let pull_request = match existing {
            Some(pr) => PublishedPullRequest::Existing(pr),
            None => {
                info!("No existing PR, creating new one");
                let pr = publish::open_pull_request(self.github, settings).await?;
                info!("Created PR #{} {}", pr.number, pr.html_url);
                PublishedPullRequest::Created(pr)
            }
        };

        Ok(Outcome::Published {
            langcount: files.len(),
            pull_request,
        })
    }
}

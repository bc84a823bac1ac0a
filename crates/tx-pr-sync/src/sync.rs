//! Preparing the working copy and pulling translations

use gh_client::PullRequestRef;
use log::info;
use std::fmt;
use tx_sync_config::{Settings, TransifexSection};

use crate::error::Result;
use crate::git::{Git, ORIGIN_REMOTE, TARGET_REMOTE};
use crate::transifex::Transifex;

/// The remote branch the working branch is reset to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub remote: String,
    pub branch: String,
}

impl Baseline {
    /// Pick the baseline for this run
    ///
    /// With a pending pull request the branch keeps building on its own
    /// pushed state so review history stays intact. Otherwise it starts from
    /// the newest upstream branch so the new pull request applies cleanly.
    pub fn choose(existing: Option<&PullRequestRef>, settings: &Settings) -> Self {
        match existing {
            Some(_) => Self {
                remote: ORIGIN_REMOTE.to_string(),
                branch: settings.working_repo.branch.clone(),
            },
            None => Self {
                remote: TARGET_REMOTE.to_string(),
                branch: settings.target_repo.branch.clone(),
            },
        }
    }
}

impl fmt::Display for Baseline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.remote, self.branch)
    }
}

/// Fetch, hard reset to `baseline` and remove everything untracked
pub async fn reset_to_baseline(git: &Git<'_>, baseline: &Baseline) -> Result<()> {
    info!("Updating remote '{}'", baseline.remote);
    git.fetch(&baseline.remote).await?;

    info!("Resetting to branch '{}'", baseline);
    git.reset_hard(&baseline.remote, &baseline.branch).await?;

    info!("Cleaning repository");
    git.clean().await
}

/// Run `tx pull` with the configured mode and threshold
pub async fn pull_translations(tx: &Transifex<'_>, transifex: &TransifexSection) -> Result<String> {
    info!("Pulling translations");
    tx.pull(&transifex.mode, &transifex.minpercent).await
}

//! Change detection, commit, push and pull request creation

use gh_client::{GitHubClient, NewPullRequest, PullRequestRef};
use log::{debug, info};
use tx_sync_config::{placeholders, render, Settings, TemplateError};

use crate::error::{Result, SyncError};
use crate::git::{Git, ORIGIN_REMOTE};

/// Whether the staged tree differs from the last commit
pub async fn has_changes(git: &Git<'_>) -> Result<bool> {
    debug!("Checking for modifications");
    let changes = git.staged_changes().await?;
    if changes.changed {
        debug!("Changed files: {}", changes.files.join(" "));
    }
    Ok(changes.changed)
}

/// Render the configured commit message
pub fn commit_message(settings: &Settings, langcount: usize) -> std::result::Result<String, TemplateError> {
    let langcount = langcount.to_string();
    render(
        &settings.pull_request.commit,
        &[
            (placeholders::MODE, settings.transifex.mode.as_str()),
            (placeholders::MIN_PERCENT, settings.transifex.minpercent.as_str()),
            (placeholders::LANG_COUNT, langcount.as_str()),
        ],
    )
}

/// Commit the staged changes and force push the working branch
///
/// The push has to be forced since the branch may have been reset onto a
/// different upstream commit.
pub async fn commit_and_push(git: &Git<'_>, settings: &Settings, langcount: usize) -> Result<()> {
    let message = commit_message(settings, langcount)?;
    git.commit(&message).await?;

    info!(
        "Pushing '{}' to '{}'",
        settings.working_repo.branch, ORIGIN_REMOTE
    );
    git.push_force(ORIGIN_REMOTE, &settings.working_repo.branch)
        .await
}

/// Open the pull request from the working branch into the target branch
pub async fn open_pull_request(
    client: &dyn GitHubClient,
    settings: &Settings,
) -> Result<PullRequestRef> {
    let texts = &settings.pull_request;
    let request = NewPullRequest {
        title: texts.title.clone(),
        body: texts.body.clone(),
        head: settings.working_repo.head_ref(),
        base: settings.target_repo.branch.clone(),
    };

    client
        .create_pull_request(&settings.target_repo.owner, &settings.target_repo.repo, &request)
        .await
        .map_err(SyncError::Api)
}

//! Finding the pull request a previous run opened

use gh_client::{GitHubClient, PullRequestRef};
use log::debug;
use tx_sync_config::TargetRepo;

use crate::error::{Result, SyncError};

/// Find the single open pull request `user` has against `target`
///
/// Zero results mean a new pull request will be opened later. More than one
/// is state this tool does not know how to reconcile, so it refuses to pick.
pub async fn find_open_pull_request(
    client: &dyn GitHubClient,
    user: &str,
    target: &TargetRepo,
) -> Result<Option<PullRequestRef>> {
    let mut prs = client
        .search_open_pull_requests(user, &target.owner, &target.repo)
        .await
        .map_err(SyncError::Api)?;

    match prs.len() {
        0 => {
            debug!("No open pull request found for {} in {}", user, target.full_name());
            Ok(None)
        }
        1 => {
            let pr = prs.remove(0);
            debug!("Reusing existing PR #{} from {}", pr.number, pr.created_at);
            Ok(Some(pr))
        }
        count => Err(SyncError::InvariantViolation {
            count,
            user: user.to_string(),
            repo: target.full_name(),
        }),
    }
}

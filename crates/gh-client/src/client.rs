//! GitHub client trait
//!
//! This module defines the `GitHubClient` trait the sync talks to. The
//! octocrab implementation lives in `octocrab_client`; tests substitute
//! their own implementation.

use crate::types::{NewPullRequest, PullRequestRef};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the two calls a translation sync makes against the hosting API.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::{GitHubClient, PullRequestRef};
///
/// async fn pending(client: &dyn GitHubClient) -> anyhow::Result<Vec<PullRequestRef>> {
///     client.search_open_pull_requests("translation-bot", "mumble-voip", "mumble").await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Search open pull requests authored by `author` in a repository
    ///
    /// Only the first page of search results is returned.
    ///
    /// # Arguments
    ///
    /// * `author` - GitHub username of the PR author
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    async fn search_open_pull_requests(
        &self,
        author: &str,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequestRef>>;

    /// Open a pull request against `owner/repo`
    ///
    /// # Returns
    ///
    /// The created pull request, or an error if the API rejects it.
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &NewPullRequest,
    ) -> anyhow::Result<PullRequestRef>;
}

/// Search query selecting open PRs by `author` in `owner/repo`
pub fn open_pull_requests_query(author: &str, owner: &str, repo: &str) -> String {
    format!(
        "type:pr is:open repo:{}/{} author:{}",
        owner, repo, author
    )
}

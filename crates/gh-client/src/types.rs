//! GitHub API data transfer objects
//!
//! These types carry only what the sync needs from the API and are
//! intentionally separate from octocrab's models.

use chrono::{DateTime, Utc};

/// Reference to an open pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// PR number (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// PR URL for opening in browser
    pub html_url: String,
}

/// Parameters for opening a new pull request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,

    /// Source branch in `owner:branch` form
    pub head: String,

    /// Branch of the target repository to merge into
    pub base: String,
}

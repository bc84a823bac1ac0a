//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.

use crate::client::{open_pull_requests_query, GitHubClient};
use crate::types::{NewPullRequest, PullRequestRef};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Create a client authenticating as `user`
    ///
    /// `password` may be the account password or a personal access token.
    pub fn with_basic_auth(user: &str, password: &str) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .basic_auth(user.to_string(), password.to_string())
            .build()
            .context("Failed to build Octocrab client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn search_open_pull_requests(
        &self,
        author: &str,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequestRef>> {
        let query = open_pull_requests_query(author, owner, repo);
        debug!("Searching issues: {}", query);

        let page = self
            .octocrab
            .search()
            .issues_and_pull_requests(&query)
            .send()
            .await
            .with_context(|| format!("Search for '{}' failed", query))?;

        let prs: Vec<PullRequestRef> = page.items.iter().map(convert_issue).collect();

        debug!(
            "Found {} open PRs by {} in {}/{}",
            prs.len(),
            author,
            owner,
            repo
        );
        Ok(prs)
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &NewPullRequest,
    ) -> anyhow::Result<PullRequestRef> {
        debug!(
            "Creating PR {} -> {}/{}:{}",
            request.head, owner, repo, request.base
        );

        let pr = self
            .octocrab
            .pulls(owner, repo)
            .create(&request.title, &request.head, &request.base)
            .body(&request.body)
            .send()
            .await
            .with_context(|| format!("Failed to create PR in {}/{}", owner, repo))?;

        Ok(convert_pull_request(&pr))
    }
}

/// Convert a search hit (issues and PRs share the model) to our type
fn convert_issue(issue: &octocrab::models::issues::Issue) -> PullRequestRef {
    PullRequestRef {
        number: issue.number,
        title: issue.title.clone(),
        created_at: issue.created_at,
        html_url: issue.html_url.to_string(),
    }
}

/// Convert octocrab PullRequest to our type
fn convert_pull_request(pr: &octocrab::models::pulls::PullRequest) -> PullRequestRef {
    PullRequestRef {
        number: pr.number,
        title: pr.title.clone().unwrap_or_default(),
        created_at: pr.created_at.unwrap_or_else(chrono::Utc::now),
        html_url: pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_default(),
    }
}


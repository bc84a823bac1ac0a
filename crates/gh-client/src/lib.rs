//! GitHub API client for the translation sync
//!
//! This crate provides a trait-based GitHub API client covering the two
//! calls a sync run needs: finding the bot's open pull request and opening
//! a new one.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - search_open_pull_requests()                   │
//! │  - create_pull_request()                         │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │         │ test doubles        │
//! │ (direct API)    │         │ (recorded calls)    │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabClient::with_basic_auth("translation-bot", "token")?;
//! let prs = client
//!     .search_open_pull_requests("translation-bot", "mumble-voip", "mumble")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::{open_pull_requests_query, GitHubClient};
pub use octocrab_client::OctocrabClient;
pub use types::{NewPullRequest, PullRequestRef};

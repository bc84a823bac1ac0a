use std::path::PathBuf;

use thiserror::Error;
use tx_pull_parser::ParseError;
use tx_sync_config::{ConfigError, TemplateError};

pub type Result<T> = std::result::Result<T, SyncError>;

/// Everything that can end a sync run early
///
/// None of these are retried; the run stops and the process exits non-zero.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("`{command}` failed with {status}\n{output}")]
    ExternalTool {
        command: String,
        status: String,
        output: String,
    },

    #[error("failed to launch `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("found {count} open pull requests by {user} in {repo}, expected at most one")]
    InvariantViolation {
        count: usize,
        user: String,
        repo: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("GitHub API request failed: {0:#}")]
    Api(anyhow::Error),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Configuration for tx-pr-sync
//!
//! This crate provides:
//! - Loading the TOML configuration file into typed [`Settings`]
//! - Rendering the `{name}` templates configured for commits and manifests

pub mod config_file;
pub mod settings;
pub mod template;

pub use config_file::{read_config_file, ConfigError, DEFAULT_CONFIG_PATH};
pub use settings::{
    placeholders, GithubSection, ManifestSettings, PullRequestTexts, Settings, TargetRepo,
    TransifexSection, WorkingRepo,
};
pub use template::{render, TemplateError};

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::template::TemplateError;

/// Location used when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "/etc/tx-pr-sync.toml";

/// Errors that can occur while loading the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid template `{section}.{key}`: {source}")]
    Template {
        section: &'static str,
        key: &'static str,
        #[source]
        source: TemplateError,
    },
}

/// Read the raw configuration file content
///
/// A missing file is an error. There is no search path and no fallback to
/// defaults, since every setting is required.
pub fn read_config_file(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Loaded config from {}", path.display());
    Ok(content)
}

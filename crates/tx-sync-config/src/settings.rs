//! Typed settings
//!
//! Loaded once from a TOML file whose sections mirror the sync run:
//! credentials, the translation pull, both repositories, pull request texts
//! and the two generated manifests. Every key is required.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config_file::{read_config_file, ConfigError};
use crate::template;

/// Placeholder names accepted by the configured templates
pub mod placeholders {
    pub const FILES: &str = "files";
    pub const MODE: &str = "mode";
    pub const MIN_PERCENT: &str = "minpercent";
    pub const LANG_COUNT: &str = "langcount";
}

/// Complete settings for one sync run
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub github: GithubSection,
    pub transifex: TransifexSection,
    #[serde(rename = "workingrepo")]
    pub working_repo: WorkingRepo,
    #[serde(rename = "targetrepo")]
    pub target_repo: TargetRepo,
    #[serde(rename = "pullrequest")]
    pub pull_request: PullRequestTexts,
    pub misc: ManifestSettings,
}

/// GitHub credentials and commit identity
#[derive(Clone, Deserialize)]
pub struct GithubSection {
    /// Account that authors commits and pull requests
    pub user: String,
    /// Password or personal access token
    pub password: String,
    /// Commit author email
    pub email: String,
}

impl fmt::Debug for GithubSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubSection")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// Parameters passed to `tx pull`
#[derive(Debug, Clone, Deserialize)]
pub struct TransifexSection {
    /// Completion mode (e.g. "reviewed")
    pub mode: String,
    /// Minimum completion percentage a language needs to be pulled
    #[serde(deserialize_with = "string_or_integer")]
    pub minpercent: String,
}

/// The fork the translation branch lives in
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingRepo {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub url: String,
    /// Local checkout
    pub path: PathBuf,
}

impl WorkingRepo {
    /// Pull request head in `owner:branch` form
    pub fn head_ref(&self) -> String {
        format!("{}:{}", self.owner, self.branch)
    }
}

/// The upstream repository receiving the pull request
#[derive(Debug, Clone, Deserialize)]
pub struct TargetRepo {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub url: String,
}

impl TargetRepo {
    /// `owner/repo`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Pull request and commit message templates
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestTexts {
    /// Sent as is
    pub title: String,
    /// Sent as is
    pub body: String,
    /// Accepts `{mode}`, `{minpercent}` and `{langcount}`
    pub commit: String,
}

/// Manifest files regenerated from the translation file list
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestSettings {
    /// Build inclusion list, relative to the working repository
    #[serde(rename = "prifile")]
    pub pri_file: PathBuf,
    /// Accepts `{files}`
    #[serde(rename = "pritemplate")]
    pub pri_template: String,
    /// Resource listing, relative to the working repository
    #[serde(rename = "qrcfile")]
    pub qrc_file: PathBuf,
    /// Accepts `{files}`
    #[serde(rename = "qrctemplate")]
    pub qrc_template: String,
    /// Translation files not managed by Transifex (space separated in the file)
    #[serde(rename = "additionaltsfiles", deserialize_with = "whitespace_list")]
    pub additional_ts_files: Vec<String>,
}

impl Settings {
    /// Load and validate settings from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = read_config_file(path)?;
        let settings = Self::from_toml_str(&content, path)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings; `path` is only used for error messages
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check every template against the placeholders it may use
    ///
    /// The pull request title and body are plain text and not checked.
    pub fn validate(&self) -> Result<(), ConfigError> {
        use placeholders::*;

        let checks: [(&'static str, &'static str, &str, &[&str]); 3] = [
            (
                "pullrequest",
                "commit",
                &self.pull_request.commit,
                &[MODE, MIN_PERCENT, LANG_COUNT],
            ),
            ("misc", "pritemplate", &self.misc.pri_template, &[FILES]),
            ("misc", "qrctemplate", &self.misc.qrc_template, &[FILES]),
        ];

        for (section, key, text, allowed) in checks {
            template::validate(text, allowed).map_err(|source| ConfigError::Template {
                section,
                key,
                source,
            })?;
        }

        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInteger {
    String(String),
    Integer(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StringOrInteger::deserialize(deserializer)? {
        StringOrInteger::String(value) => value,
        StringOrInteger::Integer(value) => value.to_string(),
    })
}

fn whitespace_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"
        [github]
        user = "translation-bot"
        password = "hunter2"
        email = "bot@example.org"

        [transifex]
        mode = "reviewed"
        minpercent = "50"

        [workingrepo]
        owner = "translation-bot"
        repo = "mumble"
        branch = "translation-update"
        url = "git@github.com:translation-bot/mumble.git"
        path = "/var/lib/tx-pr-sync/mumble"

        [targetrepo]
        owner = "mumble-voip"
        repo = "mumble"
        branch = "master"
        url = "https://github.com/mumble-voip/mumble.git"

        [pullrequest]
        title = "Transifex translation update"
        body = "Automated translation update."
        commit = "Translation update ({mode}, {minpercent}%, {langcount} languages)"

        [misc]
        prifile = "src/mumble/translations.pri"
        pritemplate = "TRANSLATIONS = {files}\n"
        qrcfile = "src/mumble/mumble_translations.qrc"
        qrctemplate = "<RCC>\n<qresource>\n{files}\n</qresource>\n</RCC>\n"
        additionaltsfiles = "mumble_en.ts"
    "#;

    fn parse(content: &str) -> Result<Settings, ConfigError> {
        Settings::from_toml_str(content, Path::new("test.toml"))
    }

    #[test]
    fn test_sample_settings() {
        let settings = parse(SAMPLE).unwrap();

        assert_eq!(settings.github.user, "translation-bot");
        assert_eq!(settings.transifex.minpercent, "50");
        assert_eq!(settings.working_repo.head_ref(), "translation-bot:translation-update");
        assert_eq!(settings.target_repo.full_name(), "mumble-voip/mumble");
        assert_eq!(
            settings.misc.pri_file,
            PathBuf::from("src/mumble/translations.pri")
        );
        assert_eq!(settings.misc.additional_ts_files, vec!["mumble_en.ts"]);
    }

    #[test]
    fn test_minpercent_as_integer() {
        let content = SAMPLE.replace("minpercent = \"50\"", "minpercent = 75");
        let settings = parse(&content).unwrap();
        assert_eq!(settings.transifex.minpercent, "75");
    }

    #[test]
    fn test_additional_files_split_on_whitespace() {
        let content = SAMPLE.replace(
            "additionaltsfiles = \"mumble_en.ts\"",
            "additionaltsfiles = \" mumble_en.ts  extra_xx.ts \"",
        );
        let settings = parse(&content).unwrap();
        assert_eq!(
            settings.misc.additional_ts_files,
            vec!["mumble_en.ts", "extra_xx.ts"]
        );
    }

    #[test]
    fn test_empty_additional_files() {
        let content = SAMPLE.replace(
            "additionaltsfiles = \"mumble_en.ts\"",
            "additionaltsfiles = \"\"",
        );
        let settings = parse(&content).unwrap();
        assert!(settings.misc.additional_ts_files.is_empty());
    }

    #[test]
    fn test_missing_key_is_error() {
        let content = SAMPLE.replace("email = \"bot@example.org\"", "");
        let err = parse(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("email"));
    }

    #[test]
    fn test_missing_section_is_error() {
        let content = SAMPLE.replace("[transifex]", "[tx]");
        let err = parse(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_commit_placeholder_is_error() {
        let content = SAMPLE.replace("{langcount} languages", "{languages}");
        let err = parse(&content).unwrap_err();
        match err {
            ConfigError::Template { section, key, .. } => {
                assert_eq!(section, "pullrequest");
                assert_eq!(key, "commit");
            }
            other => panic!("Expected template error, got {:?}", other),
        }
    }

    #[test]
    fn test_pull_request_texts_are_not_templates() {
        let content = SAMPLE.replace(
            "body = \"Automated translation update.\"",
            "body = \"Generated by `tx pull --mode={mode}`; see {{docs}}.\"",
        );
        let settings = parse(&content).unwrap();
        assert_eq!(
            settings.pull_request.body,
            "Generated by `tx pull --mode={mode}`; see {{docs}}."
        );
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let settings = parse(SAMPLE).unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tx-pr-sync.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.target_repo.branch, "master");
    }
}

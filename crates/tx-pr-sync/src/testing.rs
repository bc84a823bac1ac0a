//! Test doubles for the external collaborators

use async_trait::async_trait;
use gh_client::{GitHubClient, NewPullRequest, PullRequestRef};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tx_sync_config::Settings;

use crate::process::{CommandOutput, CommandRunner, Invocation};

/// Records invocations and answers with scripted outputs
///
/// Responses are keyed by program and first argument; anything unscripted
/// succeeds with empty output.
#[derive(Debug, Clone, Default)]
pub struct FakeRunner {
    calls: Arc<Mutex<Vec<Invocation>>>,
    responses: Vec<(String, String, CommandOutput)>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, program: &str, subcommand: &str, output: CommandOutput) -> Self {
        self.responses
            .push((program.to_string(), subcommand.to_string(), output));
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded invocations rendered as command lines
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    pub fn count(&self, program: &str, subcommand: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| {
                call.program == program
                    && call.args.first().map(String::as_str) == Some(subcommand)
            })
            .count()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutput> {
        self.calls.lock().unwrap().push(invocation.clone());

        let subcommand = invocation.args.first().map(String::as_str).unwrap_or("");
        let output = self
            .responses
            .iter()
            .find(|(program, sub, _)| *program == invocation.program && sub == subcommand)
            .map(|(_, _, output)| output.clone())
            .unwrap_or_else(|| CommandOutput::success(""));
        Ok(output)
    }
}

/// GitHub double returning a fixed search result and recording creations
///
/// Either call can be scripted to fail with an API error message.
#[derive(Debug, Clone, Default)]
pub struct FakeGitHub {
    open: Vec<PullRequestRef>,
    search_error: Option<String>,
    create_error: Option<String>,
    searches: Arc<Mutex<Vec<String>>>,
    created: Arc<Mutex<Vec<(String, String, NewPullRequest)>>>,
}

impl FakeGitHub {
    pub fn with_open(open: Vec<PullRequestRef>) -> Self {
        Self {
            open,
            ..Self::default()
        }
    }

    pub fn failing_search(mut self, message: &str) -> Self {
        self.search_error = Some(message.to_string());
        self
    }

    pub fn failing_create(mut self, message: &str) -> Self {
        self.create_error = Some(message.to_string());
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn searches(&self) -> Vec<String> {
        self.searches.lock().unwrap().clone()
    }

    pub fn created(&self) -> Vec<(String, String, NewPullRequest)> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for FakeGitHub {
    async fn search_open_pull_requests(
        &self,
        author: &str,
        owner: &str,
        repo: &str,
    ) -> anyhow::Result<Vec<PullRequestRef>> {
        self.searches
            .lock()
            .unwrap()
            .push(gh_client::open_pull_requests_query(author, owner, repo));
        if let Some(message) = &self.search_error {
            anyhow::bail!("{}", message);
        }
        Ok(self.open.clone())
    }

    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &NewPullRequest,
    ) -> anyhow::Result<PullRequestRef> {
        let mut created = self.created.lock().unwrap();
        created.push((owner.to_string(), repo.to_string(), request.clone()));
        if let Some(message) = &self.create_error {
            anyhow::bail!("{}", message);
        }
        Ok(PullRequestRef {
            number: 100 + created.len() as u64,
            title: request.title.clone(),
            created_at: chrono::Utc::now(),
            html_url: format!("https://github.com/{}/{}/pull/{}", owner, repo, 100 + created.len()),
        })
    }
}

pub fn pr_ref(number: u64) -> PullRequestRef {
    PullRequestRef {
        number,
        title: "Transifex translation update".to_string(),
        created_at: chrono::Utc::now(),
        html_url: format!("https://github.com/mumble-voip/mumble/pull/{}", number),
    }
}

const SETTINGS: &str = r##"
[github]
user = "translation-bot"
password = "secret"
email = "bot@example.org"

[transifex]
mode = "reviewed"
minpercent = 50

[workingrepo]
owner = "translation-bot"
repo = "mumble"
branch = "translation-update"
url = "git@github.com:translation-bot/mumble.git"
path = "/nonexistent/tx-pr-sync/mumble"

[targetrepo]
owner = "mumble-voip"
repo = "mumble"
branch = "master"
url = "https://github.com/mumble-voip/mumble.git"

[pullrequest]
title = "Transifex translation update"
body = "This is an automated translation update from Transifex."
commit = "Translation update\n\nUpdating {langcount} translations from Transifex (mode: {mode}, minimum: {minpercent}%)"

[misc]
prifile = "src/mumble/translations.pri"
pritemplate = "# Generated\nTRANSLATIONS = {files}\n"
qrcfile = "src/mumble/mumble_translations.qrc"
qrctemplate = "<!DOCTYPE RCC><RCC version=\"1.0\">\n<qresource>\n{files}\n</qresource>\n</RCC>\n"
additionaltsfiles = "mumble_en.ts"
"##;

/// Settings pointing at `workdir`
pub fn settings(workdir: &Path) -> Settings {
    let mut settings = Settings::from_toml_str(SETTINGS, Path::new("test.toml")).unwrap();
    settings.working_repo.path = workdir.to_path_buf();
    settings
}

/// A scratch working copy with the manifest directories in place
pub fn scratch_repo() -> (TempDir, Settings) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src/mumble")).unwrap();
    let settings = settings(dir.path());
    (dir, settings)
}

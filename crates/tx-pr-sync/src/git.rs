//! The git calls a sync run makes

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::process::{run_checked, CommandOutput, CommandRunner, Invocation};

/// Remote of the working repository (set up by `git clone`)
pub const ORIGIN_REMOTE: &str = "origin";

/// Remote of the upstream repository
pub const TARGET_REMOTE: &str = "target";

/// git bound to one working copy
pub struct Git<'a> {
    runner: &'a dyn CommandRunner,
    workdir: PathBuf,
}

impl<'a> Git<'a> {
    pub fn new(runner: &'a dyn CommandRunner, workdir: &Path) -> Self {
        Self {
            runner,
            workdir: workdir.to_path_buf(),
        }
    }

    /// `git clone <url> <path>`, run from the current directory
    pub async fn clone_into(runner: &dyn CommandRunner, url: &str, path: &Path) -> Result<()> {
        let invocation = Invocation::new("git")
            .args(["clone", url])
            .arg(path.to_string_lossy());
        run_checked(runner, &invocation, &[0]).await?;
        Ok(())
    }

    pub async fn config(&self, key: &str, value: &str) -> Result<()> {
        self.run(&["config", key, value]).await?;
        Ok(())
    }

    pub async fn remote_add(&self, name: &str, url: &str) -> Result<()> {
        self.run(&["remote", "add", name, url]).await?;
        Ok(())
    }

    pub async fn fetch(&self, remote: &str) -> Result<()> {
        self.run(&["fetch", remote]).await?;
        Ok(())
    }

    /// Point the checked-out branch at `<remote>/<branch>`, discarding local state
    pub async fn reset_hard(&self, remote: &str, branch: &str) -> Result<()> {
        let target = format!("{}/{}", remote, branch);
        self.run(&["reset", &target, "--hard"]).await?;
        Ok(())
    }

    /// Remove untracked and ignored files
    pub async fn clean(&self) -> Result<()> {
        self.run(&["clean", "-f", "-x", "-d"]).await?;
        Ok(())
    }

    pub async fn add<S: AsRef<str>>(&self, paths: &[S]) -> Result<()> {
        let mut args = vec!["add"];
        args.extend(paths.iter().map(|path| path.as_ref()));
        self.run(&args).await?;
        Ok(())
    }

    /// Compare the index against `HEAD`
    ///
    /// Exit code 1 from `git diff --exit-code` means "differences found" and
    /// is not a failure.
    pub async fn staged_changes(&self) -> Result<StagedChanges> {
        let invocation = self
            .invocation()
            .args(["diff", "--cached", "--name-only", "--exit-code"]);
        let output = run_checked(self.runner, &invocation, &[0, 1]).await?;

        let files = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        Ok(StagedChanges {
            changed: output.code == Some(1),
            files,
        })
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await?;
        Ok(())
    }

    /// Force push `branch` to `remote`
    pub async fn push_force(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", "-f", remote, branch]).await?;
        Ok(())
    }

    fn invocation(&self) -> Invocation {
        Invocation::new("git").current_dir(&self.workdir)
    }

    async fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let invocation = self.invocation().args(args.iter().copied());
        run_checked(self.runner, &invocation, &[0]).await
    }
}

/// Result of the staged-changes check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedChanges {
    /// Whether the index differs from `HEAD`
    pub changed: bool,
    /// Paths reported by git; informational only
    pub files: Vec<String>,
}

//! The Transifex client (`tx`)

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::process::{run_checked, CommandRunner, Invocation};

/// `tx` bound to one working copy
pub struct Transifex<'a> {
    runner: &'a dyn CommandRunner,
    workdir: PathBuf,
}

impl<'a> Transifex<'a> {
    pub fn new(runner: &'a dyn CommandRunner, workdir: &Path) -> Self {
        Self {
            runner,
            workdir: workdir.to_path_buf(),
        }
    }

    /// Force-pull all resources and return the combined report
    ///
    /// A failing pull is not retried.
    pub async fn pull(&self, mode: &str, minimum_percent: &str) -> Result<String> {
        let invocation = Invocation::new("tx")
            .args(["pull", "-f", "-a"])
            .arg(format!("--mode={}", mode))
            .arg(format!("--minimum-perc={}", minimum_percent))
            .current_dir(&self.workdir);

        let output = run_checked(self.runner, &invocation, &[0]).await?;
        Ok(output.combined())
    }
}

//! External process execution
//!
//! Every tool the sync drives (git, the Transifex client) is started through
//! the [`CommandRunner`] trait so tests can record invocations instead of
//! spawning processes.

use async_trait::async_trait;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use crate::error::{Result, SyncError};

/// A program, its arguments and the directory to run it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Exit code 0 with the given stdout
    #[cfg(test)]
    pub fn success(stdout: &str) -> Self {
        Self::with_code(0, stdout)
    }

    #[cfg(test)]
    pub fn with_code(code: i32, stdout: &str) -> Self {
        Self {
            code: Some(code),
            stdout: stdout.to_string(),
            stderr: String::new(),
        }
    }

    /// stdout followed by stderr
    pub fn combined(&self) -> String {
        if self.stderr.is_empty() {
            return self.stdout.clone();
        }
        let mut text = self.stdout.clone();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&self.stderr);
        text
    }

    fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "termination by signal".to_string(),
        }
    }
}

/// Runs external programs to completion
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `invocation` and capture its output
    ///
    /// A non-zero exit is not an error at this level; only failing to start
    /// the process is.
    async fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutput>;
}

/// Runs programs on the host with `tokio::process`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> std::io::Result<CommandOutput> {
        let mut command = tokio::process::Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let output = command.output().await?;

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Run `invocation` and fail unless it exits with one of `accepted`
pub async fn run_checked(
    runner: &dyn CommandRunner,
    invocation: &Invocation,
    accepted: &[i32],
) -> Result<CommandOutput> {
    debug!("$ {}", invocation);

    let output = runner
        .run(invocation)
        .await
        .map_err(|source| SyncError::Spawn {
            command: invocation.to_string(),
            source,
        })?;

    let combined = output.combined();
    if !combined.trim().is_empty() {
        debug!("{}", combined.trim_end());
    }

    match output.code {
        Some(code) if accepted.contains(&code) => Ok(output),
        _ => Err(SyncError::ExternalTool {
            command: invocation.to_string(),
            status: output.status(),
            output: combined,
        }),
    }
}

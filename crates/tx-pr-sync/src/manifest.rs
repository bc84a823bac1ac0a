//! Regenerating the translation manifests
//!
//! Two build files list the translation set: a `.pri` include listing the
//! `.ts` sources and a `.qrc` resource bundle listing the compiled `.qm`
//! files. Both are rewritten from scratch on every run from the files the
//! pull reported plus the configured extras, sorted so that reruns produce
//! identical output.

use log::info;
use std::path::{Path, PathBuf};
use tx_pull_parser::{parse_pull_output, FileEntry};
use tx_sync_config::{placeholders, render, Settings, TemplateError};

use crate::error::{Result, SyncError};
use crate::git::Git;

/// Pulled file names plus `additional`, sorted
///
/// Duplicates are kept as they are.
pub fn combine_file_list(entries: &[FileEntry], additional: &[String]) -> Vec<String> {
    let mut files: Vec<String> = entries
        .iter()
        .map(|entry| entry.filename.clone())
        .chain(additional.iter().cloned())
        .collect();
    files.sort();
    files
}

/// Render the `.pri` include: file names separated by single spaces
pub fn render_pri(files: &[String], template: &str) -> std::result::Result<String, TemplateError> {
    let joined = files.join(" ");
    render(template, &[(placeholders::FILES, joined.as_str())])
}

/// `<file>NAME.qm</file>` for a `NAME.ts` source; other names are kept
pub fn qrc_entry(filename: &str) -> String {
    let compiled = match filename.strip_suffix(".ts") {
        Some(stem) => format!("{}.qm", stem),
        None => filename.to_string(),
    };
    format!("<file>{}</file>", compiled)
}

/// Render the `.qrc` bundle: one indented entry per line
pub fn render_qrc(files: &[String], template: &str) -> std::result::Result<String, TemplateError> {
    let entries: Vec<String> = files
        .iter()
        .map(|file| format!(" {}", qrc_entry(file)))
        .collect();
    let joined = entries.join("\n");
    render(template, &[(placeholders::FILES, joined.as_str())])
}

/// Overwrite `relative` inside the working copy with `content`
fn write_manifest(workdir: &Path, relative: &Path, content: &str) -> Result<PathBuf> {
    let path = workdir.join(relative);
    info!("Updating translations listing file '{}'", path.display());
    std::fs::write(&path, content).map_err(|source| SyncError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Stage the pulled files and rewrite both manifests
///
/// Returns the combined, sorted translation file list.
pub async fn regenerate(git: &Git<'_>, settings: &Settings, pull_output: &str) -> Result<Vec<String>> {
    let entries = parse_pull_output(pull_output)?;

    let pulled: Vec<&str> = entries.iter().map(|entry| entry.path.as_str()).collect();
    git.add(&pulled).await?;

    let misc = &settings.misc;
    let workdir = &settings.working_repo.path;
    let files = combine_file_list(&entries, &misc.additional_ts_files);

    let pri = render_pri(&files, &misc.pri_template)?;
    write_manifest(workdir, &misc.pri_file, &pri)?;
    git.add(&[misc.pri_file.to_string_lossy()]).await?;

    let qrc = render_qrc(&files, &misc.qrc_template)?;
    write_manifest(workdir, &misc.qrc_file, &qrc)?;
    git.add(&[misc.qrc_file.to_string_lossy()]).await?;

    Ok(files)
}

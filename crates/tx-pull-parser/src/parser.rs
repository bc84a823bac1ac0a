//! Line matching for the `tx pull` report

use crate::types::FileEntry;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while parsing the pull report
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("no translation files found in tx pull output ({lines} lines inspected)")]
    NoFiles { lines: usize },
}

/// Parse the pull report into the files it wrote
///
/// Lines that do not look like `-> <resource>: <path>` are ignored. Entries
/// keep the order in which they were printed; duplicates are kept.
///
/// # Errors
///
/// Returns [`ParseError::NoFiles`] when not a single line matches. An empty
/// result is never returned, since the manifests cannot be built from it.
pub fn parse_pull_output(output: &str) -> Result<Vec<FileEntry>, ParseError> {
    let mut lines = 0;
    let mut entries = Vec::new();

    for line in output.lines() {
        lines += 1;
        if let Some(entry) = parse_line(line) {
            log::debug!("tx pulled {} ({})", entry.path, entry.resource);
            entries.push(entry);
        }
    }

    if entries.is_empty() {
        return Err(ParseError::NoFiles { lines });
    }

    Ok(entries)
}

/// Parse a single report line
fn parse_line(line: &str) -> Option<FileEntry> {
    static FILE_LINE_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = FILE_LINE_REGEX.get_or_init(|| {
        // Match "-> resource.id: relative/path/file.ts"
        Regex::new(r"^\s*->\s*([\w.\-]+):\s+(\S*[^/\s])\s*$").unwrap()
    });

    let captures = re.captures(line)?;
    let resource = captures.get(1)?.as_str();
    let path = captures.get(2)?.as_str();

    Some(FileEntry::new(resource, path))
}

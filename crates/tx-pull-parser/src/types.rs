//! Type definitions for the pull report

/// A translation file reported by `tx pull`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Resource (or language) label printed before the colon
    pub resource: String,

    /// Path relative to the repository root, as printed
    pub path: String,

    /// Last path segment of `path`
    pub filename: String,
}

impl FileEntry {
    pub fn new(resource: &str, path: &str) -> Self {
        let filename = path.rsplit('/').next().unwrap_or(path).to_string();
        Self {
            resource: resource.to_string(),
            path: path.to_string(),
            filename,
        }
    }
}

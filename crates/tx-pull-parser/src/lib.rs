//! Transifex pull report parser
//!
//! `tx pull` prints one line per translation file it wrote, in the form
//! `-> <resource>: <path/to/file.ts>`. This crate recovers those entries so the
//! rest of the sync can stage the files and rebuild the manifests from them.
//!
//! # Example
//!
//! ```
//! use tx_pull_parser::parse_pull_output;
//!
//! let output = "Pulling translations for resource mumble.mumble\n -> de: src/mumble/mumble_de.ts\n";
//! let entries = parse_pull_output(output)?;
//!
//! assert_eq!(entries[0].filename, "mumble_de.ts");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod parser;
mod types;

pub use parser::{parse_pull_output, ParseError};
pub use types::FileEntry;

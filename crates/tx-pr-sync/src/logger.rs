//! Console logging via env_logger
//!
//! `RUST_LOG` takes precedence over the `--verbose` default.

use env_logger::{Builder, Env};
use std::io::Write;

const CRATES: [&str; 4] = ["tx_pr_sync", "gh_client", "tx_pull_parser", "tx_sync_config"];

/// Filter used when `RUST_LOG` is not set
fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    let mut filter = String::from("warn");
    for krate in CRATES {
        filter.push_str(&format!(",{}={}", krate, level));
    }
    filter
}

pub fn init(verbose: bool) {
    Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .init();
}

//! Command-line interface.
//!
//! - `types`: clap command structures
//! - `commands`: one module per subcommand, each exposing `execute`
//! - `output`: human/JSON rendering shared by the commands

pub mod commands;
pub mod output;
pub mod types;

use std::process::ExitCode;

pub use types::{Cli, Commands};

/// Report a failed command and return the exit code for it.
///
/// The error is recorded once through `tracing`, which reaches the console
/// layer on stderr and, when configured, the log file. In JSON mode an
/// error document is also printed on stdout.
///
/// # Returns
/// * `ExitCode::FAILURE` - the caller returns it from `main` so the log
///   guard is dropped and pending file writes are flushed
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    tracing::error!(error = %format!("{err:#}"), "command failed");
    if json_mode {
        let value = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&value).unwrap_or_default());
    }
    ExitCode::FAILURE
}

//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Result of a command, renderable for people or for machines.
pub trait CommandOutput: Serialize {
    /// Plain-text rendering for the terminal.
    fn to_human(&self) -> String;
    /// JSON rendering for `--json`.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result on stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Keep only the last `visible` characters of a secret, prefixed with "...".
pub fn mask_tail(value: &str, visible: usize) -> String {
    let total = value.chars().count();
    let tail: String = value.chars().skip(total.saturating_sub(visible)).collect();
    format!("...{tail}")
}

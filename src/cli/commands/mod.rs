//! CLI command implementations.

pub mod settings;
pub mod top_coins;

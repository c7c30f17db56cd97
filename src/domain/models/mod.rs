//! Domain value types.

pub mod coin;
pub mod settings;

pub use coin::{CoinSummary, FetchOutcome};
pub use settings::Settings;

//! mm-core: Mastermind game rules, scoring, code generation, and configuration.

pub mod chance;
pub mod code;
pub mod color;
pub mod config;
pub mod engine;
pub mod scoring;

#[cfg(test)]
mod code_tests;
#[cfg(test)]
mod engine_tests;

pub use chance::ChanceMode;
pub use code::{code_token, format_code, parse_code, Code, ParseCodeError, CODE_LEN};
pub use color::{Color, ALL_COLORS, NUM_COLORS};
pub use config::{load_config, Config, ConfigError};
pub use engine::{apply_guess, new_game, ApplyError, GameState, Phase, RoundReport, TurnContext};
pub use scoring::{color_matches, exact_matches, score, Score};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

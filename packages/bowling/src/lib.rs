#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Ten-pin bowling scorer: parses a game description and computes each
//! player's total.

pub mod domain;
pub mod errors;
pub mod scorer;

// Re-exports for public API
pub use domain::{Frame, FrameChain, FrameKind, Game, Player, ScoreRow, Scoreboard};
pub use errors::{DomainError, InputKind};
pub use scorer::{Scorer, TenPinScorer, SCORE_NOT_INITIALIZED};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    bowling_test_support::logging::init();
}

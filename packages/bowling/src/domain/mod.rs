//! Domain layer: pure game logic types and helpers.

pub mod chain;
pub mod frame_parsing;
pub mod frame_types;
pub mod game;
pub mod lines;
pub mod roster;
pub mod rules;
pub mod scoring;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use chain::{assemble_chains, FrameChain};
pub use frame_types::{Frame, FrameKind, FrameNo};
pub use game::{Game, Player, ScoreRow, Scoreboard};
pub use roster::{read_roster, Roster};
pub use scoring::{cumulative_scores, frame_value, total_score};

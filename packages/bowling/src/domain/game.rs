//! A fully parsed and scored game.
//!
//! Built once from the input lines; read-only afterwards. Rescoring means
//! parsing again.

use std::io;

use serde::Serialize;
use tracing::debug;

use super::chain::{assemble_chains, FrameChain};
use super::roster::read_roster;
use super::rules::FRAMES;
use super::scoring::{cumulative_scores, total_score};
use crate::errors::domain::{DomainError, InputKind};

/// One player with their frame chain and computed total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    chain: FrameChain,
    total: u16,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn chain(&self) -> &FrameChain {
        &self.chain
    }

    pub fn total(&self) -> u16 {
        self.total
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: Vec<Player>,
}

impl Game {
    /// Parse the roster, assemble every chain, then compute totals.
    pub fn from_lines<I>(lines: &mut I) -> Result<Self, DomainError>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let roster = read_roster(lines)?;
        let chains = assemble_chains(&roster, lines)?;

        let players: Vec<Player> = roster
            .into_players()
            .into_iter()
            .zip(chains)
            .map(|(name, chain)| {
                let total = total_score(&chain);
                Player { name, chain, total }
            })
            .collect();
        debug!(players = players.len(), "total scores computed");
        Ok(Self { players })
    }

    /// Player names in input order.
    pub fn player_names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, name: &str) -> Result<&Player, DomainError> {
        self.players.iter().find(|p| p.name == name).ok_or_else(|| {
            DomainError::invalid_input(
                InputKind::UnknownPlayer,
                format!("Player {name} is not in the game!"),
            )
        })
    }

    pub fn score_of(&self, name: &str) -> Result<u16, DomainError> {
        self.player(name).map(Player::total)
    }

    pub fn frame_scores(&self, name: &str) -> Result<[u16; FRAMES], DomainError> {
        self.player(name).map(|p| cumulative_scores(&p.chain))
    }

    pub fn scoreboard(&self, with_frames: bool) -> Scoreboard {
        let rows = self
            .players
            .iter()
            .map(|p| ScoreRow {
                name: p.name.clone(),
                score: p.total,
                frames: with_frames.then(|| cumulative_scores(&p.chain).to_vec()),
            })
            .collect();
        Scoreboard { players: rows }
    }
}

/// Final standings in input order, ready for serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scoreboard {
    pub players: Vec<ScoreRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub name: String,
    pub score: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<u16>>,
}

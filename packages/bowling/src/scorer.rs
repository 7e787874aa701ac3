//! Programmatic surface consumed by the CLI.
//!
//! A scorer is initialized once from a line-oriented input and is read-only
//! afterwards. Queries made before a successful `init` return sentinels
//! (`None` / [`SCORE_NOT_INITIALIZED`]); callers must not rely on anything
//! beyond that.

use std::io::{self, BufRead, BufReader, Read};

use tracing::{debug, error, info};

use crate::domain::game::{Game, Scoreboard};
use crate::domain::rules::FRAMES;
use crate::errors::domain::{DomainError, InputKind};

/// Returned by [`Scorer::player_score`] before a successful `init`.
pub const SCORE_NOT_INITIALIZED: i32 = -1;

/// Trait for game scorers.
pub trait Scorer {
    /// Parse and score the whole input. The input is released on every path.
    fn init<R: Read>(&mut self, input: R) -> Result<(), DomainError>;

    /// Players in input order, or `None` before a successful `init`.
    fn players(&self) -> Option<Vec<String>>;

    /// Total for `name`, or [`SCORE_NOT_INITIALIZED`] before a successful
    /// `init`. Unknown names are `InvalidInput`.
    fn player_score(&self, name: &str) -> Result<i32, DomainError>;
}

/// Ten-pin bowling scorer.
#[derive(Debug, Default)]
pub struct TenPinScorer {
    game: Option<Game>,
}

impl TenPinScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.game.is_some()
    }

    /// Like [`Scorer::init`], but hands the input to `release` once reading
    /// stops, whatever the outcome. A release error fails initialization.
    pub fn init_with_release<R, F>(&mut self, mut input: R, release: F) -> Result<(), DomainError>
    where
        R: Read,
        F: FnOnce(R) -> io::Result<()>,
    {
        debug!("initializing ten-pin bowling scorer");
        self.game = None;

        let parsed = {
            let reader = BufReader::new(&mut input);
            Game::from_lines(&mut reader.lines())
        };

        if let Err(e) = release(input) {
            error!(error = %e, "failed to close input stream");
            if let Err(parse_err) = &parsed {
                debug!(error = %parse_err, "parse error superseded by release failure");
            }
            return Err(DomainError::invalid_input(
                InputKind::Io,
                "failed to close input stream",
            ));
        }

        self.game = Some(parsed?);
        debug!("scorer initialized");
        Ok(())
    }

    /// Running totals per frame for `name`; `Ok(None)` before `init`.
    pub fn frame_scores(&self, name: &str) -> Result<Option<[u16; FRAMES]>, DomainError> {
        let Some(game) = &self.game else {
            return Ok(None);
        };
        game.frame_scores(name).map(Some)
    }

    /// Final standings, or `None` before `init`.
    pub fn scoreboard(&self, with_frames: bool) -> Option<Scoreboard> {
        self.game.as_ref().map(|g| g.scoreboard(with_frames))
    }
}

impl Scorer for TenPinScorer {
    fn init<R: Read>(&mut self, input: R) -> Result<(), DomainError> {
        self.init_with_release(input, |input| {
            drop(input);
            Ok(())
        })
    }

    fn players(&self) -> Option<Vec<String>> {
        let game = self.game.as_ref()?;
        let players = game.player_names();
        debug!(players = ?players, "returning player list");
        Some(players)
    }

    fn player_score(&self, name: &str) -> Result<i32, DomainError> {
        let Some(game) = &self.game else {
            return Ok(SCORE_NOT_INITIALIZED);
        };
        info!(player = name, "get score for player");
        game.score_of(name).map(i32::from)
    }
}

//! Game setup: player count followed by one name per line.

use std::collections::HashSet;
use std::io;

use tracing::debug;

use super::lines::next_line;
use crate::errors::domain::{DomainError, InputKind};

const ROSTER_CAPACITY_HINT: usize = 64;

/// Ordered, de-duplicated player names in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn into_players(self) -> Vec<String> {
        self.players
    }
}

/// Read the player count and exactly that many names.
///
/// Consumes only the lines it needs; score lines are left for chain assembly.
pub fn read_roster<I>(lines: &mut I) -> Result<Roster, DomainError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let count = read_player_count(lines)?;

    // The count is untrusted until the names actually arrive.
    let capacity = count.min(ROSTER_CAPACITY_HINT);
    let mut seen: HashSet<String> = HashSet::with_capacity(capacity);
    let mut players = Vec::with_capacity(capacity);
    for i in 0..count {
        let Some(line) = next_line(lines)? else {
            return Err(DomainError::invalid_input(
                InputKind::MissingPlayers,
                format!("Incomplete input: there are only {i} of {count} players"),
            ));
        };
        let name = valid_player_name(&line)?;
        if !seen.insert(name.clone()) {
            return Err(DomainError::invalid_input(
                InputKind::DuplicatePlayer,
                format!("Duplicate player name: {name}"),
            ));
        }
        players.push(name);
    }

    debug!(players = ?players, "roster read");
    Ok(Roster { players })
}

fn read_player_count<I>(lines: &mut I) -> Result<usize, DomainError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let Some(line) = next_line(lines)? else {
        return Err(DomainError::invalid_input(
            InputKind::EmptyInput,
            "Input cannot be empty.",
        ));
    };
    let count: i64 = line.trim().parse().map_err(|_| {
        DomainError::invalid_input(
            InputKind::PlayerCount,
            "Input must start with an integer value.",
        )
    })?;
    if count <= 0 {
        return Err(DomainError::invalid_input(
            InputKind::PlayerCount,
            "The number of players must be greater than zero.",
        ));
    }
    usize::try_from(count).map_err(|_| {
        DomainError::invalid_input(
            InputKind::PlayerCount,
            format!("Too many players: {count}"),
        )
    })
}

/// Trim surrounding whitespace; the result must be non-empty.
fn valid_player_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::invalid_input(
            InputKind::PlayerName,
            "Player's name cannot be empty",
        ));
    }
    Ok(name.to_string())
}

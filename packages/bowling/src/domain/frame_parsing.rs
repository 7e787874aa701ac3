//! Frame parsing from score lines (e.g., "10", "7 3", "10 10 10")

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use super::frame_types::{Frame, FrameKind, FrameNo};
use super::rules::{frame_numbers, is_last_frame, MAX_ROLLS, PINS};
use crate::errors::domain::{DomainError, InputKind};

/// A single roll token: `0`..=`9` or `10`, nothing else.
fn roll_token() -> &'static Regex {
    static ROLL_TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^(?:10|[0-9])$").unwrap()
    });
    &ROLL_TOKEN_REGEX
}

impl Frame {
    /// Parse and classify one score line for frame `frame_no`.
    ///
    /// The line holds one to three whitespace-separated rolls in 0..=10.
    /// Syntax problems yield `Invalid score: <line>`; a well-formed line whose
    /// roll count or pin sum fits no frame shape yields `Invalid scores`.
    pub fn parse(frame_no: FrameNo, raw: &str) -> Result<Frame, DomainError> {
        trace!(frame_no, raw, "parsing frame");
        if !frame_numbers().contains(&frame_no) {
            return Err(DomainError::invalid_input(
                InputKind::Other,
                "Invalid frame!",
            ));
        }

        let rolls = parse_rolls(raw)?;
        let kind = classify(frame_no, &rolls)?;
        let frame = Frame {
            number: frame_no,
            kind,
        };
        trace!(%frame, "parsed frame");
        Ok(frame)
    }
}

fn parse_rolls(raw: &str) -> Result<Vec<u8>, DomainError> {
    let invalid = || {
        DomainError::invalid_input(InputKind::ScoreSyntax, format!("Invalid score: {raw}"))
    };

    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > MAX_ROLLS {
        return Err(invalid());
    }
    tokens
        .into_iter()
        .map(|tok| {
            if !roll_token().is_match(tok) {
                return Err(invalid());
            }
            tok.parse::<u8>().map_err(|_| invalid())
        })
        .collect()
}

/// Pure function of frame number and rolls.
pub fn classify(frame_no: FrameNo, rolls: &[u8]) -> Result<FrameKind, DomainError> {
    let kind = match (is_last_frame(frame_no), rolls) {
        (false, &[PINS]) => FrameKind::Strike { bonus: None },
        (false, &[first, second]) if first < PINS && first + second == PINS => {
            FrameKind::Spare { first, bonus: None }
        }
        (false, &[first, second]) if first + second < PINS => FrameKind::Open { first, second },
        (true, &[PINS, b1, b2]) => FrameKind::Strike {
            bonus: Some((b1, b2)),
        },
        (true, &[first, second, bonus]) if first < PINS && first + second == PINS => {
            FrameKind::Spare {
                first,
                bonus: Some(bonus),
            }
        }
        (true, &[first, second]) if first + second < PINS => FrameKind::Open { first, second },
        _ => {
            return Err(DomainError::invalid_input(
                InputKind::FrameShape,
                "Invalid scores",
            ))
        }
    };
    Ok(kind)
}

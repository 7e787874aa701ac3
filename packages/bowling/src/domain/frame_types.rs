//! Per-frame record types.

use std::fmt;

use super::rules::PINS;

/// Frame number, 1..=10.
pub type FrameNo = u8;

/// Classification of a frame, carrying the rolls that matter for it.
///
/// Bonus rolls only exist on the last frame, so `bonus` is `Some` exactly when
/// the owning frame is frame 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// All pins on the first roll.
    Strike { bonus: Option<(u8, u8)> },
    /// All pins across the first two rolls; the second roll is `PINS - first`.
    Spare { first: u8, bonus: Option<u8> },
    /// Pins left standing after two rolls.
    Open { first: u8, second: u8 },
}

impl FrameKind {
    pub fn label(&self) -> &'static str {
        match self {
            FrameKind::Strike { .. } => "STRIKE",
            FrameKind::Spare { .. } => "SPARE",
            FrameKind::Open { .. } => "OPEN",
        }
    }
}

/// One player's result in one numbered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    pub(crate) number: FrameNo,
    pub(crate) kind: FrameKind,
}

impl Frame {
    pub fn number(&self) -> FrameNo {
        self.number
    }

    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    pub fn is_strike(&self) -> bool {
        matches!(self.kind, FrameKind::Strike { .. })
    }

    /// First roll of the frame; always present.
    pub fn first_roll(&self) -> u8 {
        match self.kind {
            FrameKind::Strike { .. } => PINS,
            FrameKind::Spare { first, .. } | FrameKind::Open { first, .. } => first,
        }
    }

    /// Raw rolls in input order (1 to 3 values).
    pub fn rolls(&self) -> Vec<u8> {
        match self.kind {
            FrameKind::Strike { bonus: None } => vec![PINS],
            FrameKind::Strike {
                bonus: Some((b1, b2)),
            } => vec![PINS, b1, b2],
            FrameKind::Spare { first, bonus: None } => vec![first, PINS - first],
            FrameKind::Spare {
                first,
                bonus: Some(b),
            } => vec![first, PINS - first, b],
            FrameKind::Open { first, second } => vec![first, second],
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {}: {} {:?}",
            self.number,
            self.kind.label(),
            self.rolls()
        )
    }
}

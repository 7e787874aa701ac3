//! Domain-level error type used by the scorer and its collaborators.
//!
//! Every validation failure surfaces as `DomainError::InvalidInput`. The
//! `InputKind` tag lets callers match on the cause without introducing a
//! separate error tier; the human-readable message lives in `detail`.

use thiserror::Error;

/// Cause of an `InvalidInput` failure (extend as needed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputKind {
    EmptyInput,
    PlayerCount,
    MissingPlayers,
    PlayerName,
    DuplicatePlayer,
    MissingScores,
    ScoreSyntax,
    FrameShape,
    UnknownPlayer,
    Io,
    Other,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Malformed input, unknown lookups, or stream failures
    #[error("invalid input: {detail}")]
    InvalidInput { kind: InputKind, detail: String },
}

impl DomainError {
    pub fn invalid_input(kind: InputKind, detail: impl Into<String>) -> Self {
        Self::InvalidInput {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            DomainError::InvalidInput { kind, .. } => *kind,
        }
    }

    /// Message without the `invalid input:` prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::InvalidInput { detail, .. } => detail,
        }
    }
}

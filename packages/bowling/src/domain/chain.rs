//! Per-player frame chains built from frame-major score lines.

use std::io;
use std::ops::Index;

use tracing::debug;

use super::frame_types::Frame;
use super::lines::next_line;
use super::roster::Roster;
use super::rules::{frame_numbers, FRAMES};
use crate::errors::domain::{DomainError, InputKind};

/// Exactly ten frames for one player, indexed 0..=9 (frame 1 at index 0).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameChain {
    frames: [Frame; FRAMES],
}

impl FrameChain {
    /// Build a chain from frames already in order.
    ///
    /// The frames must be numbered 1..=10 in sequence.
    pub fn from_frames(frames: Vec<Frame>) -> Result<Self, DomainError> {
        let frames: [Frame; FRAMES] = frames.try_into().map_err(|v: Vec<Frame>| {
            DomainError::invalid_input(
                InputKind::Other,
                format!("Invariant violated: chain holds {} frames", v.len()),
            )
        })?;
        let numbered = frames
            .iter()
            .zip(frame_numbers())
            .all(|(frame, n)| frame.number() == n);
        if !numbered {
            return Err(DomainError::invalid_input(
                InputKind::Other,
                "Invariant violated: chain frames out of sequence",
            ));
        }
        Ok(Self { frames })
    }

    pub fn head(&self) -> &Frame {
        &self.frames[0]
    }

    /// Frame after `index`, if any.
    pub fn next(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}

impl Index<usize> for FrameChain {
    type Output = Frame;

    fn index(&self, index: usize) -> &Frame {
        &self.frames[index]
    }
}

/// Read `roster.len() * 10` score lines (all players' frame 1, then frame 2,
/// and so on) and return one chain per player in roster order.
pub fn assemble_chains<I>(roster: &Roster, lines: &mut I) -> Result<Vec<FrameChain>, DomainError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut pending: Vec<Vec<Frame>> = (0..roster.len())
        .map(|_| Vec::with_capacity(FRAMES))
        .collect();

    for frame_no in frame_numbers() {
        for frames in pending.iter_mut() {
            let Some(line) = next_line(lines)? else {
                return Err(DomainError::invalid_input(
                    InputKind::MissingScores,
                    "Incomplete input: missing scores",
                ));
            };
            frames.push(Frame::parse(frame_no, &line)?);
        }
    }

    let chains = pending
        .into_iter()
        .map(FrameChain::from_frames)
        .collect::<Result<Vec<_>, _>>()?;
    debug!(players = chains.len(), "frame chains assembled");
    Ok(chains)
}

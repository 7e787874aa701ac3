use tracing::debug;

use super::chain::FrameChain;
use super::frame_types::FrameKind;
use super::rules::{FRAMES, PINS};

/// Resolved value of the frame at `index`, including any bonus borrowed from
/// the following one or two frames.
///
/// `index` must be below `FRAMES`; anything else panics.
pub fn frame_value(chain: &FrameChain, index: usize) -> u16 {
    let frame = &chain[index];
    let pins = u16::from(PINS);
    let value = match frame.kind() {
        FrameKind::Open { first, second } => u16::from(first) + u16::from(second),
        FrameKind::Spare { bonus: Some(b), .. } => pins + u16::from(b),
        FrameKind::Spare { bonus: None, .. } => pins + u16::from(next_first_roll(chain, index)),
        FrameKind::Strike {
            bonus: Some((b1, b2)),
        } => pins + u16::from(b1) + u16::from(b2),
        FrameKind::Strike { bonus: None } => pins + strike_bonus(chain, index + 1),
    };
    debug!(frame = %frame, value, "frame value");
    value
}

/// Sum of the resolved values of all ten frames.
pub fn total_score(chain: &FrameChain) -> u16 {
    (0..FRAMES).map(|i| frame_value(chain, i)).sum()
}

/// Running total after each frame, as printed on a scoresheet.
pub fn cumulative_scores(chain: &FrameChain) -> [u16; FRAMES] {
    let mut running = 0u16;
    std::array::from_fn(|i| {
        running += frame_value(chain, i);
        running
    })
}

fn next_first_roll(chain: &FrameChain, index: usize) -> u8 {
    chain[index + 1].first_roll()
}

// Next two rolls after a strike, starting at frame `next`. A strike in frames
// 1-9 only holds one roll, so the second comes from the frame after it.
fn strike_bonus(chain: &FrameChain, next: usize) -> u16 {
    let pins = u16::from(PINS);
    match chain[next].kind() {
        FrameKind::Strike { bonus: None } => pins + u16::from(next_first_roll(chain, next)),
        FrameKind::Strike {
            bonus: Some((b1, _)),
        } => pins + u16::from(b1),
        FrameKind::Spare { .. } => pins,
        FrameKind::Open { first, second } => u16::from(first) + u16::from(second),
    }
}

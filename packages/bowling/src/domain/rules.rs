use std::ops::RangeInclusive;

pub const FRAMES: usize = 10;
pub const LAST_FRAME: u8 = FRAMES as u8;
pub const PINS: u8 = 10;
pub const PERFECT_GAME: u16 = 300;

// Rolls a single frame line may carry: one for a strike in frames 1-9,
// three for a strike or spare in the last frame.
pub const MAX_ROLLS: usize = 3;

pub fn frame_numbers() -> RangeInclusive<u8> {
    1..=LAST_FRAME
}

pub fn is_last_frame(frame_no: u8) -> bool {
    frame_no == LAST_FRAME
}

// Proptest generators for bowling games.
// Every generator produces valid frames by construction; no prop_assume!.

use proptest::prelude::*;

use crate::domain::rules::{FRAMES, PINS};

/// Rolls for one of frames 1-9: a strike, a spare, or an open frame.
pub fn regular_frame() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        1 => Just(vec![PINS]),
        3 => (0..PINS).prop_flat_map(|first| (Just(first), 0..=(PINS - first)))
            .prop_map(|(first, second)| vec![first, second]),
    ]
}

/// Rolls for frame 10, including bonus rolls when earned.
pub fn last_frame() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        (0..=PINS, 0..=PINS).prop_map(|(b1, b2)| vec![PINS, b1, b2]),
        (0..PINS, 0..=PINS).prop_map(|(first, bonus)| vec![first, PINS - first, bonus]),
        (0..PINS)
            .prop_flat_map(|first| (Just(first), 0..(PINS - first)))
            .prop_map(|(first, second)| vec![first, second]),
    ]
}

/// Ten frames of rolls for one player.
pub fn player_frames() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (
        proptest::collection::vec(regular_frame(), FRAMES - 1),
        last_frame(),
    )
        .prop_map(|(mut frames, last)| {
            frames.push(last);
            frames
        })
}

/// Frames for 1 to 4 players.
pub fn game_frames() -> impl Strategy<Value = Vec<Vec<Vec<u8>>>> {
    proptest::collection::vec(player_frames(), 1..=4)
}

pub fn render_line(rolls: &[u8]) -> String {
    rolls
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full input text: count, names `P1..Pn`, then frame-major score lines.
pub fn render_game(players: &[Vec<Vec<u8>>]) -> String {
    let mut out = format!("{}\n", players.len());
    for i in 1..=players.len() {
        out.push_str(&format!("P{i}\n"));
    }
    for frame in 0..FRAMES {
        for frames in players {
            out.push_str(&render_line(&frames[frame]));
            out.push('\n');
        }
    }
    out
}

/// Independent oracle: classic flat-roll scorer.
pub fn oracle_score(frames: &[Vec<u8>]) -> u16 {
    let rolls: Vec<u16> = frames.iter().flatten().map(|&r| u16::from(r)).collect();
    let pins = u16::from(PINS);
    let mut total = 0;
    let mut i = 0;
    for _ in 0..FRAMES {
        if rolls[i] == pins {
            total += pins + rolls[i + 1] + rolls[i + 2];
            i += 1;
        } else if rolls[i] + rolls[i + 1] == pins {
            total += pins + rolls[i + 2];
            i += 2;
        } else {
            total += rolls[i] + rolls[i + 1];
            i += 2;
        }
    }
    total
}

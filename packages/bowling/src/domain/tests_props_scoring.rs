//! Property tests for frame classification and total scoring (pure domain).

use std::io;

use proptest::prelude::*;

use crate::domain::frame_parsing::classify;
use crate::domain::game::Game;
use crate::domain::rules::{frame_numbers, PERFECT_GAME, PINS};
use crate::domain::scoring::{cumulative_scores, total_score};
use crate::domain::{test_gens, test_prelude};

fn parse_game(input: &str) -> Game {
    let mut lines = input.lines().map(|l| Ok::<_, io::Error>(l.to_string()));
    Game::from_lines(&mut lines).expect("generated games are valid")
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: chain scoring agrees with an independent flat-roll oracle
    /// and stays within [0, 300].
    #[test]
    fn prop_total_matches_oracle(frames in test_gens::player_frames()) {
        let game = parse_game(&test_gens::render_game(std::slice::from_ref(&frames)));
        let total = game.players()[0].total();

        prop_assert_eq!(total, test_gens::oracle_score(&frames));
        prop_assert!(total <= PERFECT_GAME);
    }

    /// Property: 300 is reached exactly when every roll is a strike.
    #[test]
    fn prop_perfect_only_with_all_strikes(frames in test_gens::player_frames()) {
        let game = parse_game(&test_gens::render_game(std::slice::from_ref(&frames)));
        let all_strikes = frames.iter().flatten().all(|&r| r == PINS);

        prop_assert_eq!(game.players()[0].total() == PERFECT_GAME, all_strikes);
    }

    /// Property: the running total never decreases and ends at the total.
    #[test]
    fn prop_cumulative_line_is_monotonic(frames in test_gens::player_frames()) {
        let game = parse_game(&test_gens::render_game(std::slice::from_ref(&frames)));
        let chain = game.players()[0].chain();
        let line = cumulative_scores(chain);

        prop_assert!(line.windows(2).all(|w| w[0] <= w[1]));
        prop_assert_eq!(line[line.len() - 1], total_score(chain));
    }

    /// Property: parsing the same input twice yields identical games.
    #[test]
    fn prop_reparse_is_deterministic(players in test_gens::game_frames()) {
        let input = test_gens::render_game(&players);
        prop_assert_eq!(parse_game(&input), parse_game(&input));
    }

    /// Property: frame-major interleaving deals each line to the right player.
    #[test]
    fn prop_each_player_scored_independently(players in test_gens::game_frames()) {
        let game = parse_game(&test_gens::render_game(&players));

        prop_assert_eq!(game.players().len(), players.len());
        for (player, frames) in game.players().iter().zip(&players) {
            prop_assert_eq!(player.total(), test_gens::oracle_score(frames));
            let parsed: Vec<Vec<u8>> = player.chain().iter().map(|f| f.rolls()).collect();
            prop_assert_eq!(&parsed, frames);
        }
    }

    /// Property: classification is a pure function of frame number and rolls.
    #[test]
    fn prop_classification_is_pure(frames in test_gens::player_frames()) {
        for (rolls, n) in frames.iter().zip(frame_numbers()) {
            let first = classify(n, rolls);
            let second = classify(n, rolls);
            prop_assert!(first.is_ok());
            prop_assert_eq!(first, second);
        }
    }
}

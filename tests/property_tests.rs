//! Property-based tests for the turn rules.

use proptest::prelude::*;

use pig_dice::core::PlayerId;
use pig_dice::{Decision, FixedRolls, GameConfig, PigGame, Transition};

fn faces(sides: u32) -> impl Strategy<Value = Vec<u32>> {
    prop::collection::vec(1..=sides, 1..64)
}

fn decisions() -> impl Strategy<Value = Vec<Decision>> {
    prop::collection::vec(
        prop_oneof![3 => Just(Decision::Roll), 1 => Just(Decision::Hold)],
        1..200,
    )
}

proptest! {
    /// Property: a roll of 1 zeroes the turn and passes play, whatever was at stake.
    #[test]
    fn prop_bust_resets_and_advances(
        players in 2usize..6,
        before in prop::collection::vec(2u32..=6, 0..15),
    ) {
        let mut script = before.clone();
        script.push(1);
        let config = GameConfig::new(players).with_winning_score(u32::MAX);
        let mut game = PigGame::new(config, FixedRolls::new(script)).unwrap();

        for _ in &before {
            game.roll().unwrap();
        }
        prop_assert_eq!(game.current_player().turn_score(), before.iter().sum::<u32>());

        let transition = game.roll().unwrap();
        prop_assert_eq!(transition, Transition::Bust { next: PlayerId::new(1) });
        prop_assert_eq!(game.player(PlayerId::new(0)).turn_score(), 0);
        prop_assert_eq!(game.player(PlayerId::new(0)).total_score(), 0);
    }

    /// Property: N bust-or-hold events from seat 0 come back to seat 0.
    #[test]
    fn prop_seats_cycle(players in 2usize..10, busts in prop::collection::vec(any::<bool>(), 1..40)) {
        let config = GameConfig::new(players);
        let mut game = PigGame::new(config, FixedRolls::always(1)).unwrap();

        for round in 0..3 {
            for seat in 0..players {
                prop_assert_eq!(game.active_player(), PlayerId::new(seat as u8));
                if busts[(round * players + seat) % busts.len()] {
                    game.roll().unwrap();
                } else {
                    game.hold().unwrap();
                }
            }
            prop_assert_eq!(game.active_player(), PlayerId::new(0));
        }
    }

    /// Property: scores follow the rules for any dice and any decisions.
    ///
    /// - Non-bust faces add exactly their value to the turn score
    /// - Totals only grow, and only on hold, by the held turn score
    /// - The game ends exactly when a roll reaches the winning score
    #[test]
    fn prop_score_invariants(
        players in 2usize..5,
        winning_score in 10u32..120,
        script in faces(6),
        plan in decisions(),
    ) {
        let config = GameConfig::new(players).with_winning_score(winning_score);
        let mut game = PigGame::new(config, FixedRolls::new(script)).unwrap();

        for decision in plan {
            if game.is_game_over() {
                prop_assert!(game.apply(decision).is_err());
                continue;
            }

            let player = game.active_player();
            let total_before = game.player(player).total_score();
            let turn_before = game.player(player).turn_score();

            match game.apply(decision).unwrap() {
                Transition::Continue { face, turn_score } => {
                    prop_assert!(face > 1);
                    prop_assert_eq!(turn_score, turn_before + face);
                    prop_assert!(total_before + turn_score < winning_score);
                    prop_assert_eq!(game.player(player).total_score(), total_before);
                    prop_assert_eq!(game.active_player(), player);
                }
                Transition::Won { face, winner, score } => {
                    prop_assert!(face > 1);
                    prop_assert_eq!(winner, player);
                    prop_assert_eq!(score, total_before + turn_before + face);
                    prop_assert!(score >= winning_score);
                    prop_assert_eq!(game.player(player).total_score(), total_before);
                    prop_assert!(game.is_game_over());
                }
                Transition::Bust { next } => {
                    prop_assert_eq!(game.player(player).turn_score(), 0);
                    prop_assert_eq!(game.player(player).total_score(), total_before);
                    prop_assert_eq!(next, player.next(players));
                }
                Transition::Held { banked, total_score, next } => {
                    prop_assert_eq!(banked, turn_before);
                    prop_assert_eq!(total_score, total_before + turn_before);
                    prop_assert_eq!(game.player(player).turn_score(), 0);
                    prop_assert_eq!(next, player.next(players));
                }
                Transition::Quit => prop_assert!(false, "no quit in the plan"),
            }

            // Only the active player can have points at risk
            for other in PlayerId::all(players).filter(|&p| p != game.active_player()) {
                prop_assert_eq!(game.player(other).turn_score(), 0);
            }
        }
    }
}

//! Whole-game scenarios driven through `PigGame` with scripted dice.

use pig_dice::core::PlayerId;
use pig_dice::{
    Decision, FixedRolls, GameConfig, GameResult, PigError, PigGame, ResultsDisplay, Transition,
    TurnEvent,
};

fn game(config: GameConfig, rolls: impl IntoIterator<Item = u32>) -> PigGame<FixedRolls> {
    PigGame::new(config, FixedRolls::new(rolls)).unwrap()
}

// =============================================================================
// Scripted Dice Scenarios
// =============================================================================

#[test]
fn test_always_six_wins_on_seventeenth_roll() {
    let mut game = game(GameConfig::default(), [6]);

    for roll in 1..=16 {
        assert_eq!(
            game.apply(Decision::Roll).unwrap(),
            Transition::Continue {
                face: 6,
                turn_score: 6 * roll
            }
        );
    }

    assert_eq!(
        game.apply(Decision::Roll).unwrap(),
        Transition::Won {
            face: 6,
            winner: PlayerId::new(0),
            score: 102
        }
    );
    assert_eq!(
        game.result(),
        Some(GameResult {
            winner: PlayerId::new(0),
            score: 102
        })
    );
    // The winning turn is reported, never banked
    assert_eq!(game.player(PlayerId::new(0)).total_score(), 0);
}

#[test]
fn test_always_six_with_holds_still_wins_on_seventeenth_roll() {
    let mut game = game(GameConfig::default(), [6]);
    let mut leader_rolls = 0;

    let result = loop {
        if game.active_player() == PlayerId::new(0) {
            // Roll four, bank 24
            let mut outcome = None;
            for _ in 0..4 {
                leader_rolls += 1;
                if let Transition::Won { score, .. } = game.roll().unwrap() {
                    outcome = Some(score);
                    break;
                }
            }
            if let Some(score) = outcome {
                break score;
            }
            game.hold().unwrap();
        } else {
            game.hold().unwrap();
        }
    };

    assert_eq!(leader_rolls, 17);
    assert_eq!(result, 102);
    assert_eq!(game.player(PlayerId::new(0)).total_score(), 96);
    assert_eq!(game.player(PlayerId::new(1)).total_score(), 0);
}

#[test]
fn test_always_one_never_ends() {
    let mut game = game(GameConfig::new(3), [1]);

    for step in 0..300 {
        assert_eq!(game.active_player(), PlayerId::new((step % 3) as u8));
        assert!(matches!(game.roll().unwrap(), Transition::Bust { .. }));
    }

    assert!(!game.is_game_over());
    for player in PlayerId::all(3) {
        assert_eq!(game.player(player).total_score(), 0);
        assert_eq!(game.player(player).turn_score(), 0);
    }
}

#[test]
fn test_hold_twenty_on_fifty() {
    let mut game = game(GameConfig::default(), [5]);

    for _ in 0..10 {
        game.roll().unwrap();
    }
    game.hold().unwrap();
    game.hold().unwrap();
    for _ in 0..4 {
        game.roll().unwrap();
    }

    assert_eq!(game.current_player().total_score(), 50);
    assert_eq!(game.current_player().turn_score(), 20);

    let transition = game.apply(Decision::Hold).unwrap();
    assert_eq!(
        transition,
        Transition::Held {
            banked: 20,
            total_score: 70,
            next: PlayerId::new(1)
        }
    );
    assert_eq!(game.player(PlayerId::new(0)).turn_score(), 0);
    assert!(!game.is_game_over());
}

#[test]
fn test_bust_after_big_turn() {
    let mut game = game(GameConfig::default(), [6, 6, 6, 6, 6, 1]);

    for _ in 0..5 {
        game.roll().unwrap();
    }
    assert_eq!(game.current_player().turn_score(), 30);

    assert_eq!(
        game.roll().unwrap(),
        Transition::Bust {
            next: PlayerId::new(1)
        }
    );
    assert_eq!(game.player(PlayerId::new(0)).turn_score(), 0);
    assert_eq!(game.player(PlayerId::new(0)).total_score(), 0);
}

// =============================================================================
// Terminal State
// =============================================================================

#[test]
fn test_game_over_is_final() {
    let config = GameConfig::new(4).with_winning_score(12);
    let mut game = game(config, [6]);
    game.roll().unwrap();
    assert!(matches!(game.roll().unwrap(), Transition::Won { score: 12, .. }));

    let history_len = game.state().history.len();
    for decision in [Decision::Roll, Decision::Hold, Decision::Roll] {
        assert!(matches!(game.apply(decision), Err(PigError::GameFinished)));
    }

    assert_eq!(game.state().history.len(), history_len);
    assert_eq!(game.active_player(), PlayerId::new(0));
    assert_eq!(
        game.state().history.last().map(|r| r.event),
        Some(TurnEvent::Won { score: 12 })
    );
}

#[test]
fn test_scores_beyond_u32_refused() {
    let config = GameConfig::default()
        .with_die_sides(u32::MAX)
        .with_winning_score(u32::MAX);
    let err = PigGame::new(config, FixedRolls::always(3_000_000_000)).unwrap_err();
    assert!(matches!(err, PigError::ScoreOverflow { .. }));
}

#[test]
fn test_huge_die_within_range() {
    let config = GameConfig::default()
        .with_die_sides(u32::MAX - 99)
        .with_winning_score(100);
    let mut game = game(config, [3_000_000_000]);

    assert_eq!(
        game.apply(Decision::Roll).unwrap(),
        Transition::Won {
            face: 3_000_000_000,
            winner: PlayerId::new(0),
            score: 3_000_000_000
        }
    );
}

#[test]
fn test_final_results_modes() {
    for (display, expected) in [
        (ResultsDisplay::Banked, vec![8, 0, 0]),
        (ResultsDisplay::Legacy, vec![18, 10, 10]),
    ] {
        let config = GameConfig::new(3)
            .with_winning_score(10)
            .with_results_display(display);
        // Player 1 banks 8, Player 2 passes, Player 3 wins on 5 + 5
        let mut game = game(config, [4, 4, 5, 5]);
        game.roll().unwrap();
        game.roll().unwrap();
        game.hold().unwrap();
        game.hold().unwrap();
        game.roll().unwrap(); // Player 3 rolls 5
        assert!(matches!(game.roll().unwrap(), Transition::Won { score: 10, .. }));

        let points: Vec<_> = game.final_results().iter().map(|s| s.points).collect();
        assert_eq!(points, expected, "{display:?}");
    }
}

// =============================================================================
// Seeded Games
// =============================================================================

#[test]
fn test_seeded_game_is_reproducible() {
    let play = |seed: u64| {
        let mut game = PigGame::from_config(GameConfig::default().with_seed(seed)).unwrap();
        let mut decisions = 0;
        while !game.is_game_over() && decisions < 10_000 {
            // Hold once the turn is worth 20
            let decision = if game.current_player().turn_score() >= 20 {
                Decision::Hold
            } else {
                Decision::Roll
            };
            game.apply(decision).unwrap();
            decisions += 1;
        }
        (game.result(), game.state().history.clone())
    };

    let (result1, history1) = play(2024);
    let (result2, history2) = play(2024);

    assert!(result1.is_some(), "hold-at-20 should finish well within the cap");
    assert_eq!(result1, result2);
    assert_eq!(history1, history2);
}

#[test]
fn test_larger_die() {
    let config = GameConfig::default().with_die_sides(20).with_seed(5);
    let mut game = PigGame::from_config(config).unwrap();

    for _ in 0..200 {
        if game.is_game_over() {
            break;
        }
        match game.roll().unwrap() {
            Transition::Continue { face, .. } | Transition::Won { face, .. } => {
                assert!((2..=20).contains(&face));
            }
            Transition::Bust { .. } => {}
            other => panic!("unexpected transition {other:?}"),
        }
    }
}

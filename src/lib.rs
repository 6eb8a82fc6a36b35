//! # pig-dice
//!
//! The dice game Pig for two or more players, played on a terminal.
//!
//! On your turn, roll as often as you like: every face is added to your turn
//! score, but a 1 wipes it out and ends the turn. Hold to bank the turn
//! score. The first player whose banked plus turn score reaches the winning
//! score (100 by default) on a roll wins.
//!
//! ## Modules
//!
//! - `core`: random sources, die, players, configuration, decisions, state
//! - `rules`: the `PigGame` state machine
//! - `session`: console prompts, narration and the replay loop
//! - `cli`: command-line arguments
//! - `error`: the crate error type
//!
//! ```
//! use pig_dice::{Decision, FixedRolls, GameConfig, PigGame, Transition};
//!
//! let mut game = PigGame::new(GameConfig::default(), FixedRolls::new([5, 1])).unwrap();
//! assert!(matches!(game.apply(Decision::Roll).unwrap(), Transition::Continue { turn_score: 5, .. }));
//! assert!(matches!(game.apply(Decision::Roll).unwrap(), Transition::Bust { .. }));
//! ```

pub mod core;
pub mod rules;
pub mod session;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Decision, Die, EventRecord, FixedRolls, GameConfig, GameRng, GameRngState, GameState, Phase,
    Player, PlayerId, PlayerMap, ResultsDisplay, RollSource, TurnEnd, TurnEvent,
};

pub use crate::rules::{GameResult, PigGame, Standing, Transition};

pub use crate::session::{MatchEnd, Session, SessionEnd};

pub use crate::error::{PigError, Result};

//! Core game types: random sources, die, players, configuration, decisions, state.
//!
//! Everything here is rule-free data. [`crate::rules`] drives it.

pub mod rng;
pub mod die;
pub mod player;
pub mod config;
pub mod action;
pub mod state;

pub use rng::{FixedRolls, GameRng, GameRngState, RollSource};
pub use die::{Die, BUST_FACE, DEFAULT_SIDES};
pub use player::{Player, PlayerId, PlayerMap};
pub use config::{GameConfig, ResultsDisplay, DEFAULT_PLAYERS, MAX_PLAYERS, MIN_PLAYERS, WINNING_SCORE};
pub use action::{Decision, EventRecord, TurnEvent};
pub use state::{GameState, Phase, TurnEnd};

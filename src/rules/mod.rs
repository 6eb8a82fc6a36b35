//! Pig rules.
//!
//! [`PigGame`] turns player decisions into state transitions:
//! - Rolling and busting
//! - Holding and passing the turn
//! - Detecting the winning roll
//! - Building the final results table

pub mod engine;

pub use engine::{GameResult, PigGame, Standing, Transition};

//! Game configuration.
//!
//! `GameConfig` collects everything a match needs before it starts:
//! seat count, die size, target score, and how to seed the die.
//! Build with the `with_*` methods, then call `validate()`.

use serde::{Deserialize, Serialize};

use super::die::DEFAULT_SIDES;
use super::rng::GameRng;
use crate::error::{PigError, Result};

/// Fewest players a game can have.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game can seat.
pub const MAX_PLAYERS: usize = 255;

/// Players when none are requested.
pub const DEFAULT_PLAYERS: usize = 2;

/// Score that wins the game.
pub const WINNING_SCORE: u32 = 100;

/// How the final results table reports each player's points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResultsDisplay {
    /// Each player's own banked total.
    #[default]
    Banked,
    /// The winner's unbanked turn score added to every player's total.
    ///
    /// Adds the current player's unbanked points to every row.
    Legacy,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Sides on the die.
    pub die_sides: u32,

    /// First player whose banked plus turn score reaches this wins.
    pub winning_score: u32,

    /// Fixed seed for the die. `None` seeds from entropy.
    pub seed: Option<u64>,

    pub results_display: ResultsDisplay,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYERS,
            die_sides: DEFAULT_SIDES,
            winning_score: WINNING_SCORE,
            seed: None,
            results_display: ResultsDisplay::default(),
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players with standard rules.
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_die_sides(mut self, sides: u32) -> Self {
        self.die_sides = sides;
        self
    }

    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    /// Seed the die for reproducible games.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_results_display(mut self, display: ResultsDisplay) -> Self {
        self.results_display = display;
        self
    }

    /// Check the configuration can start a game.
    pub fn validate(&self) -> Result<()> {
        if self.player_count < MIN_PLAYERS {
            return Err(PigError::TooFewPlayers {
                count: self.player_count,
            });
        }
        if self.player_count > MAX_PLAYERS {
            return Err(PigError::TooManyPlayers {
                count: self.player_count,
            });
        }
        if self.die_sides == 0 {
            return Err(PigError::InvalidSides {
                sides: self.die_sides,
            });
        }
        if self.winning_score == 0 {
            return Err(PigError::InvalidWinningScore);
        }
        // Highest reachable score: one short of the target, then the top face
        if (self.winning_score - 1).checked_add(self.die_sides).is_none() {
            return Err(PigError::ScoreOverflow {
                winning_score: self.winning_score,
                sides: self.die_sides,
            });
        }
        Ok(())
    }

    /// The die's random source: seeded if `seed` is set, fresh otherwise.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }

    /// Whether this is the multi-player variant (more than two seats).
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.player_count > DEFAULT_PLAYERS
    }
}

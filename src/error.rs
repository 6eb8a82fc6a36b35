//! Error types for the game core and the console session.

use thiserror::Error;

/// Errors raised by the game core and the console session.
#[derive(Debug, Error)]
pub enum PigError {
    /// A game needs at least two players.
    #[error("Number of players must be at least 2 (got {count})")]
    TooFewPlayers { count: usize },

    #[error("At most 255 players are supported (got {count})")]
    TooManyPlayers { count: usize },

    /// Turn points must be positive.
    #[error("Turn points must be positive (got {points})")]
    InvalidPoints { points: u32 },

    /// Adding these points would overflow the score.
    #[error("Adding {points} points would overflow the score")]
    PointsOverflow { points: u32 },

    /// A die needs at least one side.
    #[error("A die must have at least one side (got {sides})")]
    InvalidSides { sides: u32 },

    #[error("Winning score must be positive")]
    InvalidWinningScore,

    /// Scores for this die and target would not fit in a `u32`.
    #[error("Winning score {winning_score} with a {sides}-sided die exceeds the score range")]
    ScoreOverflow { winning_score: u32, sides: u32 },

    /// A roll or hold was applied after the game ended.
    #[error("The game is already over")]
    GameFinished,

    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PigError>;

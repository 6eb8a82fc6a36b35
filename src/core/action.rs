//! Player decisions and the events they produce.
//!
//! A `Decision` is what the player asks for. A `TurnEvent` is what actually
//! happened, and `EventRecord` stamps it with the player, turn and sequence
//! number for the game history.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// One choice at the decision prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Roll,
    Hold,
    Quit,
}

impl Decision {
    /// Parse a prompt answer: `r`, `h` or `q`, trimmed and case-insensitive.
    ///
    /// ```
    /// use pig_dice::core::Decision;
    ///
    /// assert_eq!(Decision::parse(" R \n"), Some(Decision::Roll));
    /// assert_eq!(Decision::parse("roll"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "r" => Some(Self::Roll),
            "h" => Some(Self::Hold),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Something that happened during a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEvent {
    /// A non-bust roll added to the turn score.
    Rolled { face: u32, turn_score: u32 },
    /// A bust roll wiped the turn score.
    Bust,
    /// The turn score was banked.
    Held { banked: u32, total_score: u32 },
    /// A roll took the player to the winning score.
    Won { score: u32 },
}

/// A recorded event with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub player: PlayerId,
    pub event: TurnEvent,
    /// Turn number when the event happened.
    pub turn: u32,
    /// Position in the whole game's history.
    pub sequence: u32,
}

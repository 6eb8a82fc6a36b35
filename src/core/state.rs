//! Game state: seats, scores, whose turn it is, and what has happened.
//!
//! `GameState` is plain data. The rules that move it forward live in
//! [`crate::rules::PigGame`]; this module only offers the bookkeeping
//! primitives those rules are built from.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{EventRecord, TurnEvent};
use super::player::{Player, PlayerId, PlayerMap};

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEnd {
    Bust,
    Held,
}

/// Where the state machine is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The current player is deciding whether to roll or hold.
    AwaitingDecision,
    /// The previous turn just ended; `active_player` already points at the next seat.
    TurnEnded(TurnEnd),
    /// A roll reached the winning score. Terminal.
    GameOver { winner: PlayerId, score: u32 },
}

/// Complete state of one match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<Player>,

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1).
    pub turn_number: u32,

    /// Non-bust faces rolled so far this turn.
    pub turn_rolls: SmallVec<[u32; 8]>,

    pub phase: Phase,

    /// Every roll, bust, hold and win, in order.
    pub history: Vec<EventRecord>,
}

impl GameState {
    /// Create a fresh state with players named "Player 1", "Player 2", ...
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerMap::new(player_count, |id| Player::new(id.to_string())),
            active_player: PlayerId::new(0),
            turn_number: 1,
            turn_rolls: SmallVec::new(),
            phase: Phase::AwaitingDecision,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.active_player]
    }

    pub fn current_player_mut(&mut self) -> &mut Player {
        &mut self.players[self.active_player]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// Winner and winning score, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<(PlayerId, u32)> {
        match self.phase {
            Phase::GameOver { winner, score } => Some((winner, score)),
            _ => None,
        }
    }

    /// Pass the turn to the next seat and record how the last one ended.
    pub fn end_turn(&mut self, how: TurnEnd) {
        self.active_player = self.active_player.next(self.player_count());
        self.turn_number += 1;
        self.turn_rolls.clear();
        self.current_player_mut().reset_turn();
        self.phase = Phase::TurnEnded(how);
    }

    /// Append an event for the active player to the history.
    pub fn record(&mut self, event: TurnEvent) {
        let sequence = self.history.len() as u32;
        self.history.push(EventRecord {
            player: self.active_player,
            event,
            turn: self.turn_number,
            sequence,
        });
    }
}

//! The Pig turn/game state machine.
//!
//! `PigGame` owns the state, the die and the random source, and moves the
//! game forward one [`Decision`] at a time:
//!
//! - **Roll** a 1: the turn score is lost and the next seat plays.
//! - **Roll** anything else: the face is added to the turn score. If banked
//!   plus turn score reaches the winning score, the game is over at once;
//!   the winning points are reported but never banked.
//! - **Hold**: the turn score is banked and the next seat plays. Holding
//!   never wins, however high the total gets.
//! - **Quit**: nothing changes; the caller is told to stop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{
    Decision, Die, GameConfig, GameRng, GameState, Phase, Player, PlayerId, ResultsDisplay,
    RollSource, TurnEnd, TurnEvent, BUST_FACE,
};
use crate::error::{PigError, Result};

/// What a decision did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The roll was added; the same player decides again.
    Continue { face: u32, turn_score: u32 },
    /// A 1 was rolled. `next` is now the active player.
    Bust { next: PlayerId },
    /// The turn score was banked. `next` is now the active player.
    Held {
        banked: u32,
        total_score: u32,
        next: PlayerId,
    },
    /// The roll reached the winning score.
    Won {
        face: u32,
        winner: PlayerId,
        score: u32,
    },
    /// The player asked to leave. The match is abandoned, not resolved.
    Quit,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    /// Banked plus turn score at the winning roll.
    pub score: u32,
}

/// One line of the final results table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub player: PlayerId,
    pub name: String,
    pub points: u32,
}

/// A single match of Pig.
#[derive(Clone, Debug)]
pub struct PigGame<R> {
    config: GameConfig,
    die: Die,
    source: R,
    state: GameState,
}

impl PigGame<GameRng> {
    /// Create a game whose die is seeded from `config.seed`, or from entropy.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        let rng = config.rng();
        Self::new(config, rng)
    }
}

impl<R: RollSource> PigGame<R> {
    /// Create a game rolling from `source`.
    pub fn new(config: GameConfig, source: R) -> Result<Self> {
        config.validate()?;
        let die = Die::new(config.die_sides)?;
        let state = GameState::new(config.player_count);

        debug!(
            players = config.player_count,
            sides = config.die_sides,
            winning_score = config.winning_score,
            "new game"
        );

        Ok(Self {
            config,
            die,
            source,
            state,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn die(&self) -> &Die {
        &self.die
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.state.active_player
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        self.state.current_player()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.state.players[id]
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// The outcome, once a roll has won the game.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state
            .winner()
            .map(|(winner, score)| GameResult { winner, score })
    }

    /// Give back the random source, e.g. to keep rolling in the next match.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Apply one player decision.
    pub fn apply(&mut self, decision: Decision) -> Result<Transition> {
        match decision {
            Decision::Roll => self.roll(),
            Decision::Hold => self.hold(),
            Decision::Quit => {
                info!(player = %self.state.active_player, "player quit");
                Ok(Transition::Quit)
            }
        }
    }

    /// Roll the die for the current player.
    pub fn roll(&mut self) -> Result<Transition> {
        self.begin_decision()?;

        let face = self.die.roll(&mut self.source);
        let player = self.state.active_player;

        if face == BUST_FACE {
            debug!(%player, "bust");
            self.state.current_player_mut().reset_turn();
            self.state.record(TurnEvent::Bust);
            self.state.end_turn(TurnEnd::Bust);
            return Ok(Transition::Bust {
                next: self.state.active_player,
            });
        }

        self.state.current_player_mut().add_to_turn(face)?;
        self.state.turn_rolls.push(face);
        let turn_score = self.state.current_player().turn_score();
        self.state.record(TurnEvent::Rolled { face, turn_score });
        debug!(%player, face, turn_score, "rolled");

        let score = self.state.current_player().potential_score();
        if score >= self.config.winning_score {
            info!(%player, score, "game won");
            self.state.record(TurnEvent::Won { score });
            self.state.phase = Phase::GameOver {
                winner: player,
                score,
            };
            return Ok(Transition::Won {
                face,
                winner: player,
                score,
            });
        }

        Ok(Transition::Continue { face, turn_score })
    }

    /// Bank the current player's turn score and pass the turn.
    ///
    /// Does not check for a win.
    pub fn hold(&mut self) -> Result<Transition> {
        self.begin_decision()?;

        let player = self.state.active_player;
        let banked = self.state.current_player().turn_score();
        let total_score = self.state.current_player_mut().hold();
        debug!(%player, banked, total_score, "held");

        self.state.record(TurnEvent::Held {
            banked,
            total_score,
        });
        self.state.end_turn(TurnEnd::Held);

        Ok(Transition::Held {
            banked,
            total_score,
            next: self.state.active_player,
        })
    }

    /// Points per player for the final results table.
    ///
    /// With [`ResultsDisplay::Legacy`] the current player's unbanked turn
    /// score is added to every row.
    #[must_use]
    pub fn final_results(&self) -> Vec<Standing> {
        let bonus = match self.config.results_display {
            ResultsDisplay::Banked => 0,
            ResultsDisplay::Legacy => self.state.current_player().turn_score(),
        };

        self.state
            .players
            .iter()
            .map(|(player, p)| Standing {
                player,
                name: p.name.clone(),
                points: p.total_score().saturating_add(bonus),
            })
            .collect()
    }

    /// Refuse once the game is over; otherwise the active player is deciding.
    fn begin_decision(&mut self) -> Result<()> {
        if self.state.is_game_over() {
            return Err(PigError::GameFinished);
        }
        self.state.phase = Phase::AwaitingDecision;
        Ok(())
    }
}

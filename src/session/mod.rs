//! The interactive console session.
//!
//! `Session` runs matches over any `BufRead`/`Write` pair: it prompts for
//! decisions, rejects bad input, narrates the game and offers a replay.
//! Quitting is returned as [`SessionEnd::Quit`] so the caller decides how
//! the process ends.

pub mod render;

use std::io::{BufRead, Write};

use tracing::debug;

use crate::core::{Decision, GameConfig, RollSource, BUST_FACE};
use crate::error::Result;
use crate::rules::{PigGame, Transition};

const DECISION_PROMPT: &str = "\nEnter 'r' to roll, 'h' to hold, 'q' to quit: ";
const DECISION_RETRY: &str = "Invalid input. Please enter 'r' to roll, 'h' to hold, 'q' to quit.";
const REPLAY_PROMPT: &str = "\nWould you like to play again? (y/n): ";
const REPLAY_RETRY: &str = "Please enter 'y' for yes or 'n' for no.";
const QUIT_FAREWELL: &str = "Thanks for playing. Please come again.";
const QUIT_ACK: &str = "Press Enter to Exit.";
const GOODBYE: &str = "Thanks for playing Pig Game! Goodbye!";

/// How a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The players declined another match.
    Finished,
    /// A player quit mid-game.
    Quit,
    /// Input ran out before the session was over.
    InputClosed,
}

/// How a single match stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchEnd {
    Won,
    Quit,
    InputClosed,
}

/// Console driver for one or more matches.
pub struct Session<I, O> {
    config: GameConfig,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(config: GameConfig, input: I, output: O) -> Self {
        Self {
            config,
            input,
            output,
        }
    }

    /// Play matches until the players stop. Every match uses a fresh game
    /// with the same configuration; `source` keeps rolling across matches.
    pub fn run<S: RollSource>(&mut self, mut source: S) -> Result<SessionEnd> {
        loop {
            let mut game = PigGame::new(self.config.clone(), source)?;
            match self.play_game(&mut game)? {
                MatchEnd::Won => {}
                MatchEnd::Quit => return Ok(SessionEnd::Quit),
                MatchEnd::InputClosed => return Ok(SessionEnd::InputClosed),
            }
            source = game.into_source();

            match self.prompt_replay()? {
                Some(true) => debug!("starting another match"),
                Some(false) => {
                    writeln!(self.output, "{GOODBYE}")?;
                    return Ok(SessionEnd::Finished);
                }
                None => return Ok(SessionEnd::InputClosed),
            }
        }
    }

    /// Play one match to the end, then print the final results.
    pub fn play_game<S: RollSource>(&mut self, game: &mut PigGame<S>) -> Result<MatchEnd> {
        render::banner(&mut self.output, game.config().winning_score)?;

        while !game.is_game_over() {
            if let Some(end) = self.play_turn(game)? {
                return Ok(end);
            }
        }

        render::final_results(&mut self.output, &game.final_results())?;
        Ok(MatchEnd::Won)
    }

    /// Play the current player's turn. Returns `Some` if the match stops
    /// without a winner.
    fn play_turn<S: RollSource>(&mut self, game: &mut PigGame<S>) -> Result<Option<MatchEnd>> {
        let name = game.current_player().name.clone();
        render::turn_header(&mut self.output, &name)?;

        loop {
            render::dashboard(&mut self.output, game.state())?;

            let Some(decision) = self.prompt_decision()? else {
                return Ok(Some(MatchEnd::InputClosed));
            };

            match game.apply(decision)? {
                Transition::Continue { face, turn_score } => {
                    render::rolled(&mut self.output, &name, face)?;
                    render::added(&mut self.output, face, turn_score)?;
                }
                Transition::Bust { .. } => {
                    render::rolled(&mut self.output, &name, BUST_FACE)?;
                    render::bust(&mut self.output)?;
                    return Ok(None);
                }
                Transition::Held { total_score, .. } => {
                    render::held(&mut self.output, &name, total_score)?;
                    return Ok(None);
                }
                Transition::Won { face, score, .. } => {
                    let turn_score = game.current_player().turn_score();
                    render::rolled(&mut self.output, &name, face)?;
                    render::added(&mut self.output, face, turn_score)?;
                    render::won(&mut self.output, &name, score)?;
                    return Ok(None);
                }
                Transition::Quit => {
                    writeln!(self.output, "{QUIT_FAREWELL}")?;
                    self.prompt(QUIT_ACK)?;
                    self.read_line()?;
                    return Ok(Some(MatchEnd::Quit));
                }
            }
        }
    }

    /// Ask until the answer is `r`, `h` or `q`. `None` when input is closed.
    fn prompt_decision(&mut self) -> Result<Option<Decision>> {
        loop {
            self.prompt(DECISION_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match Decision::parse(&line) {
                Some(decision) => return Ok(Some(decision)),
                None => {
                    debug!(input = %line.trim(), "rejected decision");
                    writeln!(self.output, "{DECISION_RETRY}")?;
                }
            }
        }
    }

    /// Ask until the answer is `y` or `n`. `None` when input is closed.
    fn prompt_replay(&mut self) -> Result<Option<bool>> {
        loop {
            self.prompt(REPLAY_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().to_lowercase().as_str() {
                "y" => return Ok(Some(true)),
                "n" => return Ok(Some(false)),
                other => {
                    debug!(input = %other, "rejected replay answer");
                    writeln!(self.output, "{REPLAY_RETRY}")?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Hand back the input and output, e.g. to inspect what was written.
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }
}

//! Command-line arguments.
//!
//! `--numPlayers` is lenient: a value that is not an integer,
//! or a missing value, falls back to two players with a warning. A count
//! below two is refused.

use clap::Parser;

use crate::core::{GameConfig, ResultsDisplay, DEFAULT_PLAYERS, DEFAULT_SIDES, MIN_PLAYERS, WINNING_SCORE};
use crate::error::{PigError, Result};

#[derive(Parser, Debug)]
#[command(name = "pig")]
#[command(about = "The dice game Pig for two or more players")]
pub struct Args {
    /// Number of players (at least 2)
    #[arg(
        long = "numPlayers",
        value_name = "N",
        num_args = 0..=1,
        default_missing_value = "",
        allow_negative_numbers = true
    )]
    pub num_players: Option<String>,

    /// Seed the die for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Sides on the die
    #[arg(long, default_value_t = DEFAULT_SIDES, value_parser = clap::value_parser!(u32).range(2..))]
    pub sides: u32,

    /// Points needed to win
    #[arg(long, default_value_t = WINNING_SCORE, value_parser = clap::value_parser!(u32).range(1..))]
    pub winning_score: u32,

    /// Add the winner's unbanked points to every total in the final results
    #[arg(long)]
    pub legacy_results: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Something worth telling the players before the game starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// `--numPlayers` was unusable; two players it is.
    InvalidPlayerCount { raw: String },
    /// More than two players.
    Multiplayer { players: usize },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::InvalidPlayerCount { .. } => write!(
                f,
                "Warning: Invalid --numPlayers argument. Defaulting to {DEFAULT_PLAYERS} players."
            ),
            Notice::Multiplayer { players } => write!(
                f,
                "Starting game with {players} players (Extra Credit Feature!)"
            ),
        }
    }
}

/// A validated configuration plus the notices to print before playing.
#[derive(Clone, Debug)]
pub struct Launch {
    pub config: GameConfig,
    pub notices: Vec<Notice>,
}

/// Resolve the raw `--numPlayers` value.
///
/// `Ok(None)` means the value was unusable and the default applies.
pub fn parse_player_count(raw: Option<&str>) -> Result<Option<usize>> {
    let Some(raw) = raw else {
        return Ok(Some(DEFAULT_PLAYERS));
    };
    match raw.trim().parse::<i64>() {
        Ok(count) if count < MIN_PLAYERS as i64 => Err(PigError::TooFewPlayers {
            count: count.max(0) as usize,
        }),
        Ok(count) => Ok(Some(usize::try_from(count).unwrap_or(usize::MAX))),
        Err(_) => Ok(None),
    }
}

impl Args {
    /// Turn the arguments into a game configuration.
    ///
    /// Fails if fewer than two players were asked for.
    pub fn into_launch(self) -> Result<Launch> {
        let mut notices = Vec::new();

        let player_count = match parse_player_count(self.num_players.as_deref())? {
            Some(count) => count,
            None => {
                notices.push(Notice::InvalidPlayerCount {
                    raw: self.num_players.unwrap_or_default(),
                });
                DEFAULT_PLAYERS
            }
        };

        let results_display = if self.legacy_results {
            ResultsDisplay::Legacy
        } else {
            ResultsDisplay::Banked
        };

        let mut config = GameConfig::new(player_count)
            .with_die_sides(self.sides)
            .with_winning_score(self.winning_score)
            .with_results_display(results_display);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;

        if config.is_multiplayer() {
            notices.push(Notice::Multiplayer {
                players: player_count,
            });
        }

        Ok(Launch { config, notices })
    }
}

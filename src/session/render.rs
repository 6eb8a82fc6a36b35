//! Console text for the game: banner, dashboard, narration, results.

use std::io::Write;

use crate::core::{GameState, BUST_FACE};
use crate::rules::Standing;

const RULE: &str = "==================================================";

pub fn banner(out: &mut impl Write, winning_score: u32) -> std::io::Result<()> {
    writeln!(out, "WELCOME TO PIG GAME!")?;
    writeln!(out, "Rules:")?;
    writeln!(out, "- Roll the die to accumulate points for your turn.")?;
    writeln!(out, "- If you roll a {BUST_FACE}, you lose all points for that turn!")?;
    writeln!(out, "- Hold to add your turn points to your total score.")?;
    writeln!(out, "- First player to reach {winning_score} points wins!")?;
    writeln!(out, "- Enter 'r' to roll, 'h' to hold, 'q' to quit")?;
    writeln!(out)
}

pub fn turn_header(out: &mut impl Write, name: &str) -> std::io::Result<()> {
    writeln!(out, "\n--- {name}'s Turn ---")
}

/// Every player's total, then whose turn it is and their turn score.
pub fn dashboard(out: &mut impl Write, state: &GameState) -> std::io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "CURRENT GAME STATE:")?;
    for player in state.players.values() {
        writeln!(out, "  {player}")?;
    }
    let current = state.current_player();
    writeln!(out, "Current turn: {}", current.name)?;
    writeln!(out, "Turn score: {}", current.turn_score())?;
    if !state.turn_rolls.is_empty() {
        let rolls: Vec<String> = state.turn_rolls.iter().map(u32::to_string).collect();
        writeln!(out, "Rolls this turn: {}", rolls.join(", "))?;
    }
    writeln!(out, "{RULE}")
}

pub fn rolled(out: &mut impl Write, name: &str, face: u32) -> std::io::Result<()> {
    writeln!(out, "\n{name} rolled: {face}")
}

pub fn bust(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Oops! Rolled a {BUST_FACE}. Turn ends with no points.")
}

pub fn added(out: &mut impl Write, face: u32, turn_score: u32) -> std::io::Result<()> {
    writeln!(out, "Added {face} to turn score. Turn total: {turn_score}")
}

pub fn won(out: &mut impl Write, name: &str, score: u32) -> std::io::Result<()> {
    writeln!(out, "{name} WINS WITH {score} POINTS!")
}

pub fn held(out: &mut impl Write, name: &str, total_score: u32) -> std::io::Result<()> {
    writeln!(out, "\n{name} holds!")?;
    writeln!(out, "Added turn score to total. New total: {total_score}")
}

pub fn final_results(out: &mut impl Write, standings: &[Standing]) -> std::io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "FINAL RESULTS:")?;
    writeln!(out, "{RULE}")?;
    for standing in standings {
        writeln!(out, "  {}: {} points", standing.name, standing.points)?;
    }
    writeln!(out, "{RULE}")
}

#![cfg(feature = "std")]

use std::string::String;

use crate::{
    common::ShotResult,
    game::{Side, TurnReport},
    grid::Grid,
};

const RULE: &str = "--------------------";

/// Greeting and input instructions shown once at start-up.
pub fn greeting() -> &'static str {
    concat!(
        "-------------------\n",
        "  Welcome to the\n",
        "      game of\n",
        "    sea battle\n",
        "-------------------\n",
        " input format: x y\n",
        " x - row number\n",
        " y - column number",
    )
}

/// One-line narration of a shot's outcome.
pub fn narrate(result: ShotResult) -> &'static str {
    match result {
        ShotResult::Miss => "Miss!",
        ShotResult::Hit => "Ship hit!",
        ShotResult::Sunk => "Ship destroyed!",
    }
}

/// Both boards as printed before every turn: the user's first, then the
/// computer's.
pub fn render_boards(user: &Grid, computer: &Grid) -> String {
    std::format!(
        "{}\nUser board:\n{}\n{}\nComputer board:\n{}",
        RULE, user, RULE, computer
    )
}

/// Banner announcing whose move it is.
pub fn turn_banner(side: Side) -> String {
    let who = match side {
        Side::User => "User moves!",
        Side::Computer => "Computer moves!",
    };
    std::format!("{}\n{}", RULE, who)
}

/// Lines printed after a resolved turn. The computer's target is echoed
/// since nobody typed it.
pub fn describe_turn(report: &TurnReport) -> String {
    let mut out = String::new();
    if report.side == Side::Computer {
        out.push_str(&std::format!("Computer move: {}\n", report.target));
    }
    out.push_str(narrate(report.result));
    out
}

/// Closing announcement.
pub fn announce_winner(winner: Side) -> String {
    let who = match winner {
        Side::User => "User wins!",
        Side::Computer => "Computer wins!",
    };
    std::format!("{}\n{}", RULE, who)
}

// src/view/team_stats.rs
use crate::{
    csv::Row,
    format::fmt,
    schema::team_stats::*,
};

use super::{body, cell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamStatRow {
    pub team: String,
    pub pra: String,
    pub pra_per_game: String,
    pub games_played: String,
    /// Shown only when the row is expanded.
    pub details: Vec<(&'static str, String)>,
}

impl TeamStatRow {
    pub fn headline(&self) -> String {
        format!("{} — {} PRA", self.team, self.pra)
    }

    pub fn summary(&self) -> String {
        format!("PRA/G: {} · Games Played: {}", self.pra_per_game, self.games_played)
    }
}

// (label, column, numeric)
const DETAILS: [(&str, usize, bool); 10] = [
    ("PPG", PPG, true),
    ("RPG", RPG, true),
    ("APG", APG, true),
    ("Games Remaining Today", GAMES_LEFT_TODAY, true),
    ("Games Remaining Total", GAMES_LEFT_TOTAL, true),
    ("PRA Last Week", PRA_LAST_WEEK, true),
    ("PRA This Week", PRA_THIS_WEEK, true),
    ("PRA/G (Last 7 Days)", PRA_PER_GAME_7D, true),
    ("Season DNPs", SEASON_DNPS, true),
    ("Next Game (CT)", NEXT_GAME, false),
];

/// One record per non-header row, same order as the sheet. Row positions
/// here are what `Msg::ToggleTeam` refers to.
pub fn rows(table: &[Row]) -> Vec<TeamStatRow> {
    body(table)
        .iter()
        .map(|r| TeamStatRow {
            team: s!(cell(r, TEAM)),
            pra: fmt(cell(r, PRA)),
            pra_per_game: fmt(cell(r, PRA_PER_GAME)),
            games_played: fmt(cell(r, GAMES_PLAYED)),
            details: DETAILS
                .iter()
                .map(|&(label, ix, numeric)| {
                    let v = cell(r, ix);
                    (label, if numeric { fmt(v) } else { s!(v) })
                })
                .collect(),
        })
        .collect()
}

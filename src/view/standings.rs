// src/view/standings.rs
use crate::{
    csv::Row,
    format::{fmt, leading_int},
    schema::standings::*,
};

use super::{body, cell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingRow {
    pub rank: String,
    pub team: String,
    pub total_pra: String,
    /// Gap to the leader; never set on the first displayed row.
    pub pra_behind: Option<String>,
}

impl StandingRow {
    pub fn headline(&self) -> String {
        format!("{}. {}", self.rank, self.team)
    }
}

/// Rows whose rank cell starts with an integer. Notes, blank lines and
/// footers in the sheet fall out here.
pub fn rows(table: &[Row]) -> Vec<StandingRow> {
    body(table)
        .iter()
        .filter(|r| leading_int(cell(r, RANK)).is_some())
        .enumerate()
        .map(|(i, r)| {
            let behind = cell(r, PRA_BEHIND);
            StandingRow {
                rank: s!(cell(r, RANK)),
                team: s!(cell(r, TEAM)),
                total_pra: fmt(cell(r, TOTAL_PRA)),
                pra_behind: (i != 0 && !behind.is_empty()).then(|| fmt(behind)),
            }
        })
        .collect()
}

// src/data.rs
//
// Parsed tables, one slot per source. A refresh replaces a slot wholesale.

use crate::{
    csv::{self, Table},
    fetch::Source,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tables {
    pub standings: Option<Table>,
    pub team_stats: Option<Table>,
    pub games: Option<Table>,
}

impl Tables {
    pub fn get(&self, source: Source) -> Option<&Table> {
        match source {
            Source::Standings => self.standings.as_ref(),
            Source::TeamStats => self.team_stats.as_ref(),
            Source::Games     => self.games.as_ref(),
        }
    }

    pub fn set(&mut self, source: Source, table: Table) {
        let slot = match source {
            Source::Standings => &mut self.standings,
            Source::TeamStats => &mut self.team_stats,
            Source::Games     => &mut self.games,
        };
        *slot = Some(table);
    }

    /// Parse `text` and store it as the new table for `source`.
    pub fn apply_text(&mut self, source: Source, text: &str) {
        let table = csv::parse(text);
        logd!("Data: {source} → {} rows", table.len());
        self.set(source, table);
    }

    /// Rows for `source`, empty while nothing has arrived.
    pub fn rows(&self, source: Source) -> &[Vec<String>] {
        self.get(source).map(|t| t.as_slice()).unwrap_or(&[])
    }
}

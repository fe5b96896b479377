// src/view/mod.rs
//
// Table → display records. Rows carry no arity guarantee, so every cell
// access goes through `cell`.

pub mod games;
pub mod standings;
pub mod team_stats;
pub mod text;

use crate::{
    config::state::Tab,
    csv::Row,
    data::Tables,
    fetch::Source,
};

pub use games::GameRow;
pub use standings::StandingRow;
pub use team_stats::TeamStatRow;

pub const LOADING: &str = "Loading...";
pub const LOADING_TEAMS: &str = "Loading team stats...";
pub const LOADING_GAMES: &str = "Loading games...";
pub const PLAYERS_SOON: &str = "Player stats coming soon.";

/// Cell `ix` of `row`, or `""` when the row is too short.
#[inline]
pub fn cell(row: &[String], ix: usize) -> &str {
    row.get(ix).map(String::as_str).unwrap_or("")
}

/// A table counts as loaded once it has something past the header row.
#[inline]
pub fn is_loaded(rows: &[Row]) -> bool {
    rows.len() > 1
}

/// Everything after the header row.
#[inline]
pub fn body(rows: &[Row]) -> &[Row] {
    rows.get(1..).unwrap_or(&[])
}

#[derive(Clone, Debug, PartialEq)]
pub enum TabView {
    /// Source not here yet (or failed); show the message.
    Loading(&'static str),
    Standings(Vec<StandingRow>),
    Teams(Vec<TeamStatRow>),
    Players(&'static str),
    Games(Vec<GameRow>),
}

/// Build what `tab` should show. Until standings arrive, every tab shows the
/// generic loading line.
pub fn build(tab: Tab, tables: &Tables) -> TabView {
    if !is_loaded(tables.rows(Source::Standings)) {
        return TabView::Loading(LOADING);
    }
    match tab {
        Tab::Standings => TabView::Standings(standings::rows(tables.rows(Source::Standings))),
        Tab::Teams => {
            let rows = tables.rows(Source::TeamStats);
            if is_loaded(rows) { TabView::Teams(team_stats::rows(rows)) }
            else { TabView::Loading(LOADING_TEAMS) }
        }
        Tab::Players => TabView::Players(PLAYERS_SOON),
        Tab::Games => {
            let rows = tables.rows(Source::Games);
            if is_loaded(rows) { TabView::Games(games::rows(rows)) }
            else { TabView::Loading(LOADING_GAMES) }
        }
    }
}

// src/view/games.rs
use crate::{
    csv::Row,
    format::fmt,
    schema::games::*,
};

use super::{body, cell};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRow {
    pub time: String,
    pub position: String,
    pub player: String,
    pub school: String,
    pub conference: String,
    pub opponent: String,
    pub home_away: String,
    pub location: String,
    pub tv: String,
    pub pra: String,
    pub box_score: String,
    pub status: String,
}

impl GameRow {
    pub fn headline(&self) -> String {
        format!("{} — {} ({}) vs {}", self.time, self.player, self.position, self.opponent)
    }

    pub fn venue_line(&self) -> String {
        format!(
            "School: {} · Conf: {} · H/A: {} · Location: {}",
            self.school, self.conference, self.home_away, self.location
        )
    }

    pub fn broadcast_line(&self) -> String {
        format!(
            "TV: {} · PRA: {} · Box Score: {} · Status: {}",
            self.tv, self.pra, self.box_score, self.status
        )
    }
}

pub fn rows(table: &[Row]) -> Vec<GameRow> {
    body(table)
        .iter()
        .map(|r| GameRow {
            time: s!(cell(r, TIME)),
            position: s!(cell(r, POSITION)),
            player: s!(cell(r, PLAYER)),
            school: s!(cell(r, SCHOOL)),
            conference: s!(cell(r, CONFERENCE)),
            opponent: s!(cell(r, OPPONENT)),
            home_away: s!(cell(r, HOME_AWAY)),
            location: s!(cell(r, LOCATION)),
            tv: s!(cell(r, TV)),
            pra: fmt(cell(r, PRA)),
            box_score: s!(cell(r, BOX_SCORE)),
            status: s!(cell(r, STATUS)),
        })
        .collect()
}

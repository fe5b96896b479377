// src/schema.rs
//
// Column positions in each published sheet. The sheets have no stable
// header names, so everything downstream indexes by these.

pub mod standings {
    pub const RANK: usize = 0;
    pub const TEAM: usize = 1;
    pub const TOTAL_PRA: usize = 2;
    pub const PRA_BEHIND: usize = 3;
}

pub mod team_stats {
    pub const TEAM: usize = 1;
    pub const PRA: usize = 2;
    pub const GAMES_PLAYED: usize = 4;
    pub const PRA_PER_GAME: usize = 5;
    pub const PPG: usize = 6;
    pub const RPG: usize = 7;
    pub const APG: usize = 8;
    pub const GAMES_LEFT_TODAY: usize = 9;
    pub const GAMES_LEFT_TOTAL: usize = 10;
    pub const PRA_LAST_WEEK: usize = 11;
    pub const PRA_THIS_WEEK: usize = 12;
    pub const PRA_PER_GAME_7D: usize = 13;
    pub const SEASON_DNPS: usize = 14;
    pub const NEXT_GAME: usize = 15;
}

pub mod games {
    pub const TIME: usize = 0;
    pub const POSITION: usize = 1;
    pub const PLAYER: usize = 2;
    pub const SCHOOL: usize = 4;
    pub const CONFERENCE: usize = 5;
    pub const OPPONENT: usize = 6;
    pub const HOME_AWAY: usize = 7;
    pub const LOCATION: usize = 8;
    pub const TV: usize = 9;
    pub const PRA: usize = 10;
    pub const BOX_SCORE: usize = 11;
    pub const STATUS: usize = 12;
}

// src/config/consts.rs

// Published sheet exports (one workbook, three tabs)
const SHEET_BASE: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQ92bkZknBs7jBaDDaklzctQ6kUHeh2UC4AhnA4NVMzeefCgIrOxtuEgRYzsyLzaN1HSnVi-shWlDdw/pub";

pub const STANDINGS_GID: u64 = 256842994;
pub const TEAM_STATS_GID: u64 = 727393704;
pub const GAMES_GID: u64 = 1191468531;

pub fn sheet_url(gid: u64) -> String {
    format!("{SHEET_BASE}?gid={gid}&single=true&output=csv")
}

// Net config
pub const USER_AGENT: &str = concat!("sickos_league/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;
pub const REFRESH_SECS: u64 = 0; // 0 = manual refresh only

// Local cache
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const CONFIG_FILE: &str = "sickos.cfg";

// Layout
pub const APP_TITLE: &str = "Sickos League";
pub const CONTENT_MAX_WIDTH: f32 = 480.0;
pub const WINDOW_W: f32 = 500.0;
pub const WINDOW_H: f32 = 860.0;

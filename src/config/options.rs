// src/config/options.rs
use std::{fs, io, path::{Path, PathBuf}, time::Duration};

use super::consts::*;
use crate::fetch::Source;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub sources: SourceUrls,
    pub net: NetOptions,
    pub cache: CacheOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            sources: SourceUrls::default(),
            net: NetOptions::default(),
            cache: CacheOptions::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUrls {
    pub standings: String,
    pub team_stats: String,
    pub games: String,
}

impl Default for SourceUrls {
    fn default() -> Self {
        Self {
            standings: sheet_url(STANDINGS_GID),
            team_stats: sheet_url(TEAM_STATS_GID),
            games: sheet_url(GAMES_GID),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetOptions {
    pub timeout_secs: u64,
    /// Auto-refresh period; 0 disables it.
    pub refresh_secs: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self { timeout_secs: TIMEOUT_SECS, refresh_secs: REFRESH_SECS }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration { Duration::from_secs(self.timeout_secs.max(1)) }

    pub fn refresh_every(&self) -> Option<Duration> {
        (self.refresh_secs > 0).then(|| Duration::from_secs(self.refresh_secs))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheOptions {
    /// Seed tables from the last good download at startup.
    pub use_cache: bool,
    pub dir: PathBuf,
}

impl Default for CacheOptions {
    fn default() -> Self {
        Self { use_cache: true, dir: PathBuf::from(STORE_DIR) }
    }
}

impl AppOptions {
    pub fn url(&self, source: Source) -> &str {
        match source {
            Source::Standings => &self.sources.standings,
            Source::TeamStats => &self.sources.team_stats,
            Source::Games     => &self.sources.games,
        }
    }

    /// Load `key=value` options. A missing or unreadable file gives defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                logd!("Config: loaded {}", path.display());
                Self::parse(&text)
            }
            Err(e) => {
                logd!("Config: {} not used ({}), defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Unknown keys are ignored; values that don't parse keep the default.
    pub fn parse(text: &str) -> Self {
        let mut opts = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some((key, val)) = line.split_once('=') else { continue };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "standings_url"  => opts.sources.standings = s!(val),
                "team_stats_url" => opts.sources.team_stats = s!(val),
                "games_url"      => opts.sources.games = s!(val),
                "timeout_secs" => {
                    if let Ok(v) = val.parse() { opts.net.timeout_secs = v; }
                }
                "refresh_secs" => {
                    if let Ok(v) = val.parse() { opts.net.refresh_secs = v; }
                }
                "use_cache" => opts.cache.use_cache = val == "1" || val.eq_ignore_ascii_case("true"),
                "cache_dir" => opts.cache.dir = PathBuf::from(val),
                other => logd!("Config: ignoring unknown key {other:?}"),
            }
        }
        opts
    }

    pub fn to_config_string(&self) -> String {
        let mut s = s!();
        s.push_str(&format!("standings_url={}\n", self.sources.standings));
        s.push_str(&format!("team_stats_url={}\n", self.sources.team_stats));
        s.push_str(&format!("games_url={}\n", self.sources.games));
        s.push_str(&format!("timeout_secs={}\n", self.net.timeout_secs));
        s.push_str(&format!("refresh_secs={}\n", self.net.refresh_secs));
        s.push_str(&format!("use_cache={}\n", if self.cache.use_cache { 1 } else { 0 }));
        s.push_str(&format!("cache_dir={}\n", self.cache.dir.display()));
        s
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_config_string())
    }
}

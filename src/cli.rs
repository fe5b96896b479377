// src/cli.rs
use std::{fs, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};

use crate::{
    config::{
        consts::CONFIG_FILE,
        options::AppOptions,
        state::{Msg, Tab, UiState},
    },
    data::Tables,
    fetch::{self, Source},
    progress::Progress,
    store,
    view,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Print one Sickos League tab as plain text")]
pub struct Args {
    /// Tab to print: standings, teams, players or games
    #[arg(short, long, default_value = "standings", value_parser = parse_tab)]
    pub tab: Tab,

    /// Expand team-stats row N (0-based, header excluded)
    #[arg(short, long)]
    pub expand: Option<usize>,

    /// Options file (key=value)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Read standings from a local CSV instead of the network
    #[arg(long)]
    pub standings_file: Option<PathBuf>,

    /// Read team stats from a local CSV instead of the network
    #[arg(long)]
    pub teams_file: Option<PathBuf>,

    /// Read games from a local CSV instead of the network
    #[arg(long)]
    pub games_file: Option<PathBuf>,

    /// Use only cached downloads, no network
    #[arg(long)]
    pub offline: bool,

    /// Don't read or write the download cache
    #[arg(long)]
    pub no_cache: bool,
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    Tab::from_key(s).ok_or_else(|| format!("unknown tab: {s} (standings|teams|players|games)"))
}

impl Args {
    fn file_for(&self, source: Source) -> Option<&PathBuf> {
        match source {
            Source::Standings => self.standings_file.as_ref(),
            Source::TeamStats => self.teams_file.as_ref(),
            Source::Games     => self.games_file.as_ref(),
        }
    }
}

/// Progress to stderr so stdout stays clean for the rendered tab.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Fetching {total} source(s)…");
    }
    fn item_done(&mut self, source: Source) {
        self.done += 1;
        eprintln!("Fetched {source} ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, source: Source, err: &str) {
        self.done += 1;
        eprintln!("Failed {source}: {err}");
    }
}

pub fn run() -> color_eyre::Result<()> {
    run_with(Args::parse())
}

pub fn run_with(args: Args) -> color_eyre::Result<()> {
    let mut options = AppOptions::load(&args.config);
    if args.no_cache {
        options.cache.use_cache = false;
    }

    let tables = load_tables(&args, &options)?;

    let mut state = UiState::default();
    state.update(Msg::SelectTab(args.tab));
    if let Some(ix) = args.expand {
        state.update(Msg::ToggleTeam(ix));
    }

    let view = view::build(state.active_tab, &tables);
    print!("{}", view::text::render(&view, &state));
    Ok(())
}

fn load_tables(args: &Args, options: &AppOptions) -> color_eyre::Result<Tables> {
    let mut tables = Tables::default();
    let mut missing = Vec::new();

    for source in Source::ALL {
        if let Some(path) = args.file_for(source) {
            let text = fs::read_to_string(path)
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            tables.apply_text(source, &text);
        } else if args.offline {
            if !options.cache.use_cache {
                return Err(eyre!("--offline needs the cache (drop --no-cache)"));
            }
            match store::load_raw(&options.cache.dir, source) {
                Ok(text) => tables.apply_text(source, &text),
                Err(e) => logd!("Cache: Missing {source} ({e})"),
            }
        } else {
            missing.push(source);
        }
    }

    if missing.is_empty() {
        return Ok(tables);
    }

    let mut progress = CliProgress { done: 0, total: 0 };
    for fetched in fetch::fetch_all(options, &missing, Some(&mut progress)) {
        // Failures already reported; the tab shows its loading line.
        if let Ok(text) = fetched.result {
            if options.cache.use_cache {
                if let Err(e) = store::save_raw(&options.cache.dir, fetched.source, &text) {
                    loge!("Cache: Save failed {}: {e}", fetched.source);
                }
            }
            tables.apply_text(fetched.source, &text);
        }
    }
    Ok(tables)
}

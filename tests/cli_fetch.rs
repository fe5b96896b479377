// tests/cli_fetch.rs
//
// The CLI only goes to the network for sources it has no local file for.
#![cfg(feature = "cli")]

mod common;

use std::{fs, path::PathBuf};

use sickos_league::{
    cli::{self, Args},
    config::state::Tab,
};

use common::Stub;

const STANDINGS: &str = "Rank,Team,Total PRA,PRA Behind\n1,Sickos,100,\n";
const TEAMS: &str = "Rank,Team,PRA\n1,Sickos,100\n";
const GAMES: &str = "Time,Pos,Player\n7:00 PM,G,Jay Doe\n";

fn setup(stub: &Stub) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = dir.path().join("sickos.cfg");
    let text = format!(
        "standings_url={}\nteam_stats_url={}\ngames_url={}\ntimeout_secs=5\nuse_cache=0\n",
        stub.url("/standings.csv"),
        stub.url("/teams.csv"),
        stub.url("/games.csv"),
    );
    fs::write(&cfg, text).unwrap();
    fs::write(dir.path().join("teams.csv"), TEAMS).unwrap();
    fs::write(dir.path().join("games.csv"), GAMES).unwrap();
    fs::write(dir.path().join("standings.csv"), STANDINGS).unwrap();
    (dir, cfg)
}

fn args(config: PathBuf) -> Args {
    Args {
        tab: Tab::Standings,
        expand: None,
        config,
        standings_file: None,
        teams_file: None,
        games_file: None,
        offline: false,
        no_cache: true,
    }
}

fn stub() -> Stub {
    Stub::start(&[
        ("/standings.csv", STANDINGS),
        ("/teams.csv", TEAMS),
        ("/games.csv", GAMES),
    ])
}

#[test]
fn local_files_skip_their_downloads() {
    let stub = stub();
    let (dir, cfg) = setup(&stub);

    let mut a = args(cfg);
    a.teams_file = Some(dir.path().join("teams.csv"));
    a.games_file = Some(dir.path().join("games.csv"));
    cli::run_with(a).unwrap();

    assert_eq!(stub.hits(), 1);
}

#[test]
fn all_local_files_means_no_network() {
    let stub = stub();
    let (dir, cfg) = setup(&stub);

    let mut a = args(cfg);
    a.standings_file = Some(dir.path().join("standings.csv"));
    a.teams_file = Some(dir.path().join("teams.csv"));
    a.games_file = Some(dir.path().join("games.csv"));
    cli::run_with(a).unwrap();

    assert_eq!(stub.hits(), 0);
}

#[test]
fn no_files_fetches_everything() {
    let stub = stub();
    let (_dir, cfg) = setup(&stub);

    cli::run_with(args(cfg)).unwrap();

    assert_eq!(stub.hits(), 3);
}

#[test]
fn offline_without_cache_is_an_error() {
    let stub = stub();
    let (_dir, cfg) = setup(&stub);

    let mut a = args(cfg);
    a.offline = true;
    assert!(cli::run_with(a).is_err());
    assert_eq!(stub.hits(), 0);
}

// tests/view_models.rs
//
// Sheet text → parsed tables → what each tab shows.

use sickos_league::{
    config::state::{Msg, Tab, UiState},
    data::Tables,
    fetch::Source,
    view::{self, cell, TabView},
};

const STANDINGS: &str = "\
Rank,Team,Total PRA,PRA Behind
1,Sickos,\"12,345\",
2,Bench Mob,12000,345
,Updated nightly,,
3,Third Wheel,11000.5,1345
";

const TEAMS: &str = "\
Rank,Team,PRA,Owner,GP,PRA/G,PPG,RPG,APG,Today,Left,Last Wk,This Wk,PRA/G 7d,DNP,Next
1,Sickos,12345,Ann,40,30.86,18.2,7.1,5.5,2,20,800,640,31.25,1,\"Sat, 7:00 PM\"
2,Short Row,900
";

const GAMES: &str = "\
Time,Pos,Player,x,School,Conf,Opp,H/A,Loc,TV,PRA,Box,Status
7:00 PM,G,Jay Doe,,State,Big 12,Tech,H,Arena,ESPN,1234,link,Final
";

fn loaded() -> Tables {
    let mut tables = Tables::default();
    tables.apply_text(Source::Standings, STANDINGS);
    tables.apply_text(Source::TeamStats, TEAMS);
    tables.apply_text(Source::Games, GAMES);
    tables
}

#[test]
fn cell_out_of_range_is_empty() {
    let row = vec!["a".to_string()];
    assert_eq!(cell(&row, 0), "a");
    assert_eq!(cell(&row, 5), "");
    assert_eq!(cell(&[], 0), "");
}

#[test]
fn everything_waits_for_standings() {
    let mut tables = Tables::default();
    tables.apply_text(Source::Games, GAMES);
    for tab in Tab::ALL {
        assert_eq!(view::build(tab, &tables), TabView::Loading(view::LOADING));
    }
}

#[test]
fn per_tab_loading_lines() {
    let mut tables = Tables::default();
    tables.apply_text(Source::Standings, STANDINGS);
    assert_eq!(view::build(Tab::Teams, &tables), TabView::Loading(view::LOADING_TEAMS));
    assert_eq!(view::build(Tab::Games, &tables), TabView::Loading(view::LOADING_GAMES));
    assert_eq!(view::build(Tab::Players, &tables), TabView::Players(view::PLAYERS_SOON));
}

#[test]
fn header_only_sheet_is_not_loaded() {
    let mut tables = Tables::default();
    tables.apply_text(Source::Standings, "Rank,Team,Total PRA,PRA Behind");
    assert_eq!(view::build(Tab::Standings, &tables), TabView::Loading(view::LOADING));
}

#[test]
fn standings_keep_ranked_rows_only() {
    let TabView::Standings(rows) = view::build(Tab::Standings, &loaded()) else {
        panic!("expected standings");
    };
    let names: Vec<&str> = rows.iter().map(|r| r.team.as_str()).collect();
    assert_eq!(names, vec!["Sickos", "Bench Mob", "Third Wheel"]);

    assert_eq!(rows[0].headline(), "1. Sickos");
    assert_eq!(rows[0].total_pra, "12,345");
    assert_eq!(rows[0].pra_behind, None);
    assert_eq!(rows[1].total_pra, "12,000");
    assert_eq!(rows[1].pra_behind.as_deref(), Some("345"));
    assert_eq!(rows[2].total_pra, "11,000.5");
    assert_eq!(rows[2].pra_behind.as_deref(), Some("1,345"));
}

#[test]
fn standings_blank_gap_is_hidden() {
    let mut tables = Tables::default();
    tables.apply_text(Source::Standings, "Rank,Team,PRA,Behind\n1,A,10,\n2,B,9,\n");
    let TabView::Standings(rows) = view::build(Tab::Standings, &tables) else { panic!() };
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.pra_behind.is_none()));
}

#[test]
fn team_stats_map_columns_and_tolerate_short_rows() {
    let TabView::Teams(rows) = view::build(Tab::Teams, &loaded()) else {
        panic!("expected team stats");
    };
    // header skipped, trailing artifact row kept as an empty record
    assert_eq!(rows.len(), 3);

    let first = &rows[0];
    assert_eq!(first.headline(), "Sickos — 12,345 PRA");
    assert_eq!(first.summary(), "PRA/G: 30.86 · Games Played: 40");
    assert_eq!(first.details.len(), 10);
    assert_eq!(first.details[0], ("PPG", "18.2".to_string()));
    assert_eq!(first.details[9], ("Next Game (CT)", "Sat, 7:00 PM".to_string()));

    let short = &rows[1];
    assert_eq!(short.headline(), "Short Row — 900 PRA");
    assert_eq!(short.summary(), "PRA/G:  · Games Played: ");
    assert!(short.details.iter().all(|(_, v)| v.is_empty()));
}

#[test]
fn games_lines() {
    let TabView::Games(rows) = view::build(Tab::Games, &loaded()) else {
        panic!("expected games");
    };
    let g = &rows[0];
    assert_eq!(g.headline(), "7:00 PM — Jay Doe (G) vs Tech");
    assert_eq!(g.venue_line(), "School: State · Conf: Big 12 · H/A: H · Location: Arena");
    assert_eq!(g.broadcast_line(), "TV: ESPN · PRA: 1,234 · Box Score: link · Status: Final");
}

#[test]
fn text_render_standings() {
    let tables = loaded();
    let state = UiState::default();
    let out = view::text::render(&view::build(state.active_tab, &tables), &state);
    let expected = "\
1. Sickos
  Total PRA: 12,345
2. Bench Mob
  Total PRA: 12,000
  PRA Behind: 345
3. Third Wheel
  Total PRA: 11,000.5
  PRA Behind: 1,345
";
    assert_eq!(out, expected);
}

#[test]
fn text_render_expands_only_the_open_team() {
    let tables = loaded();
    let mut state = UiState::default();
    state.update(Msg::SelectTab(Tab::Teams));
    state.update(Msg::ToggleTeam(0));

    let out = view::text::render(&view::build(state.active_tab, &tables), &state);
    assert!(out.starts_with("- Sickos — 12,345 PRA\n"));
    assert!(out.contains("    Season DNPs: 1\n"));
    assert!(out.contains("+ Short Row — 900 PRA\n"));
    assert_eq!(out.matches("    PPG:").count(), 1);
}

#[test]
fn text_render_games_and_loading() {
    let mut state = UiState::default();
    state.update(Msg::SelectTab(Tab::Games));

    let out = view::text::render(&view::build(state.active_tab, &loaded()), &state);
    let expected = "\
7:00 PM — Jay Doe (G) vs Tech
  School: State · Conf: Big 12 · H/A: H · Location: Arena
  TV: ESPN · PRA: 1,234 · Box Score: link · Status: Final
";
    assert_eq!(out, expected);

    let empty = view::text::render(&view::build(state.active_tab, &Tables::default()), &state);
    assert_eq!(empty, "Loading...\n");
}

#[test]
fn refresh_replaces_table_wholesale() {
    let mut tables = loaded();
    tables.apply_text(Source::Standings, "Rank,Team,PRA,Behind\n1,New Leader,1,\n");
    let TabView::Standings(rows) = view::build(Tab::Standings, &tables) else { panic!() };
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].team, "New Leader");
}

// src/gui/router.rs
use crate::config::state::Tab;
use super::pages::{ self, Page };

pub static PAGES: &[&'static dyn Page] = &[
    &pages::standings::PAGE,
    &pages::team_stats::PAGE,
    &pages::players::PAGE,
    &pages::games::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(tab: Tab) -> &'static dyn Page {
    match tab {
        Tab::Standings => &pages::standings::PAGE,
        Tab::Teams     => &pages::team_stats::PAGE,
        Tab::Players   => &pages::players::PAGE,
        Tab::Games     => &pages::games::PAGE,
    }
}

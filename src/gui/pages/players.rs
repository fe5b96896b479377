// src/gui/pages/players.rs
use eframe::egui::{self, RichText};

use crate::config::state::{Msg, Tab, UiState};
use crate::gui::style;
use crate::view::TabView;

use super::Page;

pub struct PlayersPage;
pub static PAGE: PlayersPage = PlayersPage;

impl Page for PlayersPage {
    fn tab(&self) -> Tab { Tab::Players }

    fn draw(&self, ui: &mut egui::Ui, view: &TabView, _state: &UiState) -> Option<Msg> {
        if let TabView::Players(text) = view {
            ui.label(RichText::new(*text).color(style::SUBTLE));
        }
        None
    }
}

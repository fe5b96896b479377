// src/gui/pages/mod.rs
use eframe::egui::{self, RichText};

use crate::config::state::{Msg, Tab, UiState};
use crate::gui::style;
use crate::view::TabView;

pub mod games;
pub mod players;
pub mod standings;
pub mod team_stats;

pub trait Page: Send + Sync + 'static {
    fn tab(&self) -> Tab;

    /// Section heading above the rows. Defaults to the tab title.
    fn heading(&self) -> &'static str {
        self.tab().title()
    }

    /// Draw the page body. Pages ignore views that aren't theirs.
    /// Returns a message when the user did something.
    fn draw(&self, ui: &mut egui::Ui, view: &TabView, state: &UiState) -> Option<Msg>;
}

/// Muted section heading, shared by the list pages.
pub(super) fn heading(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(22.0).strong().color(style::SUBTLE));
    ui.add_space(4.0);
}

/// Thin rule between rows.
pub(super) fn rule(ui: &mut egui::Ui) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 0.0, style::RULE);
}

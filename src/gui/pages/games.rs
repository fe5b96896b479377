// src/gui/pages/games.rs
use eframe::egui::{self, CornerRadius, Frame, Margin, RichText, Stroke};

use crate::config::state::{Msg, Tab, UiState};
use crate::gui::style;
use crate::view::TabView;

use super::{heading, Page};

pub struct GamesPage;
pub static PAGE: GamesPage = GamesPage;

impl Page for GamesPage {
    fn tab(&self) -> Tab { Tab::Games }

    fn draw(&self, ui: &mut egui::Ui, view: &TabView, _state: &UiState) -> Option<Msg> {
        let TabView::Games(rows) = view else { return None };
        heading(ui, self.heading());

        for r in rows {
            Frame::new()
                .fill(style::CARD_BG)
                .stroke(Stroke::new(1.0, style::RULE))
                .corner_radius(CornerRadius::same(style::RADIUS))
                .inner_margin(Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(r.headline()).size(16.0).strong());
                    ui.add_space(4.0);
                    ui.label(RichText::new(r.venue_line()).size(14.0).color(style::SUBTLE));
                    ui.add_space(2.0);
                    ui.label(RichText::new(r.broadcast_line()).size(14.0).color(style::SUBTLE));
                });
            ui.add_space(6.0);
        }
        None
    }
}

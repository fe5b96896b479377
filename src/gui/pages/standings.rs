// src/gui/pages/standings.rs
use eframe::egui::{self, RichText};

use crate::config::state::{Msg, Tab, UiState};
use crate::gui::style;
use crate::view::TabView;

use super::{heading, rule, Page};

pub struct StandingsPage;
pub static PAGE: StandingsPage = StandingsPage;

impl Page for StandingsPage {
    fn tab(&self) -> Tab { Tab::Standings }

    fn draw(&self, ui: &mut egui::Ui, view: &TabView, _state: &UiState) -> Option<Msg> {
        let TabView::Standings(rows) = view else { return None };
        heading(ui, self.heading());

        for r in rows {
            ui.add_space(12.0);
            ui.label(RichText::new(r.headline()).size(18.0).strong());
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 4.0;
                ui.label(RichText::new("Total PRA:").size(15.0));
                ui.label(RichText::new(&r.total_pra).size(15.0).strong());
            });
            if let Some(behind) = &r.pra_behind {
                ui.add_space(6.0);
                ui.label(RichText::new(format!("PRA Behind: {behind}")).size(14.0).color(style::MUTED));
            }
            ui.add_space(12.0);
            rule(ui);
        }
        None
    }
}

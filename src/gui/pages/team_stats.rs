// src/gui/pages/team_stats.rs
use eframe::egui::{self, CursorIcon, Label, RichText, Sense};

use crate::config::state::{Msg, Tab, UiState};
use crate::gui::style;
use crate::view::TabView;

use super::{heading, rule, Page};

pub struct TeamStatsPage;
pub static PAGE: TeamStatsPage = TeamStatsPage;

impl Page for TeamStatsPage {
    fn tab(&self) -> Tab { Tab::Teams }

    fn draw(&self, ui: &mut egui::Ui, view: &TabView, state: &UiState) -> Option<Msg> {
        let TabView::Teams(rows) = view else { return None };
        heading(ui, self.heading());

        let mut msg = None;
        for (i, r) in rows.iter().enumerate() {
            ui.add_space(10.0);

            let title = Label::new(RichText::new(r.headline()).size(17.0).strong())
                .selectable(false)
                .sense(Sense::click());
            if ui.add(title).on_hover_cursor(CursorIcon::PointingHand).clicked() {
                msg = Some(Msg::ToggleTeam(i));
            }
            ui.label(RichText::new(r.summary()).size(14.0).color(style::SUBTLE));

            if state.is_expanded(i) {
                ui.add_space(8.0);
                for (label, value) in &r.details {
                    ui.label(RichText::new(format!("{label}: {value}")).size(14.0).color(style::DETAIL));
                }
            }
            ui.add_space(10.0);
            rule(ui);
        }
        msg
    }
}

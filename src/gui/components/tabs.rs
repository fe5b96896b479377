// src/gui/components/tabs.rs
//
// Top tab strip: equal-width buttons, active one inverted. Returns the
// message to dispatch; switching itself happens in UiState::update.

use eframe::egui::{self, Button, CornerRadius, RichText, Stroke};
use egui_extras::{Size, StripBuilder};

use crate::config::state::{Msg, UiState};
use crate::gui::{router, style};

pub fn draw(ui: &mut egui::Ui, state: &UiState) -> Option<Msg> {
    let mut msg = None;
    let pages = router::all_pages();
    let width = ui.available_width();

    ui.allocate_ui(egui::vec2(width, style::TAB_HEIGHT), |ui| {
        StripBuilder::new(ui)
            .sizes(Size::remainder(), pages.len())
            .horizontal(|mut strip| {
                for page in pages {
                    let tab = page.tab();
                    let active = tab == state.active_tab;
                    let (bg, fg) = if active { (style::INK, style::PAPER) } else { (style::PAPER, style::INK) };

                    strip.cell(|ui| {
                        let btn = Button::new(RichText::new(tab.title()).strong().color(fg))
                            .fill(bg)
                            .stroke(Stroke::new(1.0, style::BORDER))
                            .corner_radius(CornerRadius::same(style::RADIUS));
                        if ui.add_sized(ui.available_size(), btn).clicked() && !active {
                            msg = Some(Msg::SelectTab(tab));
                        }
                    });
                }
            });
    });

    msg
}

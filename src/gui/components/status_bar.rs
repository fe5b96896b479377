// src/gui/components/status_bar.rs
use eframe::egui::{self, RichText};

use crate::config::state::Msg;
use crate::gui::style;

pub fn draw(ui: &mut egui::Ui, status: &str, busy: bool, failed: bool) -> Option<Msg> {
    let mut msg = None;
    ui.horizontal(|ui| {
        let refresh = ui.add_enabled(!busy, egui::Button::new("Refresh"));
        if refresh.clicked() {
            msg = Some(Msg::Refresh);
        }
        if busy {
            ui.spinner();
        }
        let color = if failed { style::ERROR } else { style::MUTED };
        ui.label(RichText::new(status).size(12.0).color(color));
    });
    msg
}

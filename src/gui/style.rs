// src/gui/style.rs
use eframe::egui::Color32;

pub const INK: Color32 = Color32::from_rgb(0x11, 0x11, 0x11);
pub const PAPER: Color32 = Color32::WHITE;
pub const BORDER: Color32 = Color32::from_rgb(0xdd, 0xdd, 0xdd);
pub const RULE: Color32 = Color32::from_rgb(0xee, 0xee, 0xee);
pub const SUBTLE: Color32 = Color32::from_rgb(0x55, 0x55, 0x55);
pub const MUTED: Color32 = Color32::from_rgb(0x77, 0x77, 0x77);
pub const DETAIL: Color32 = Color32::from_rgb(0x44, 0x44, 0x44);
pub const CARD_BG: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
pub const ERROR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);

pub const TAB_HEIGHT: f32 = 40.0;
pub const RADIUS: u8 = 8;

// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use sickos_league::{
    config::{consts::{CONFIG_FILE, WINDOW_H, WINDOW_W}, options::AppOptions},
    gui, log, logf,
};
use eframe::egui::{ IconData, ViewportBuilder };

fn app_icon() -> Option<IconData> {
    let rgba = image::load_from_memory(include_bytes!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/sickos.png"
    )))
    .ok()?
    .to_rgba8();
    let (w, h) = rgba.dimensions();
    Some(IconData { rgba: rgba.into_raw(), width: w, height: h })
}

fn main() {
    log::init();

    let options = AppOptions::load(Path::new(CONFIG_FILE));
    logf!("Init: refresh={}s cache={}", options.net.refresh_secs, options.cache.use_cache);

    let mut viewport = ViewportBuilder::default().with_inner_size([WINDOW_W, WINDOW_H]);
    if let Some(icon) = app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions { viewport, ..Default::default() };

    if let Err(e) = gui::run(native, options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}

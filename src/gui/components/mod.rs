// src/gui/components/mod.rs
pub mod status_bar;
pub mod tabs;

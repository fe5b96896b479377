// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;
pub mod data;
pub mod fetch;
pub mod format;
pub mod progress;
pub mod schema;
pub mod store;
pub mod view;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

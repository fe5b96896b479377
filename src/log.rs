// src/log.rs
//
// Debug log lives in .store/debug.log. The logf!/logd!/loge! macros are thin
// wrappers over tracing, so RUST_LOG filtering works as usual.

use std::{fs::{self, OpenOptions}, path::Path, sync::{Mutex, OnceLock}};

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the file subscriber. Safe to call more than once; only the first
/// call does anything. Falls back to stderr if the log file can't be opened.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let _ = fs::create_dir_all(STORE_DIR);
        let path = Path::new(STORE_DIR).join(LOG_FILE);
        let file = OpenOptions::new().create(true).append(true).open(&path);

        let res = match file {
            Ok(file) => fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            Err(_) => fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        // Another subscriber (tests, embedding) already won; keep it.
        let _ = res;
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}

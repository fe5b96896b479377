// src/store.rs
//
// Last good download per source, kept as the raw CSV text so it goes back
// through the same parser on load.

use std::{fs, io, path::{Path, PathBuf}};

use crate::fetch::Source;

pub fn raw_path(dir: &Path, source: Source) -> PathBuf {
    dir.join(join!(source.label(), ".csv"))
}

pub fn save_raw(dir: &Path, source: Source, text: &str) -> io::Result<PathBuf> {
    if !dir.as_os_str().is_empty() {
        fs::create_dir_all(dir)?;
    }
    let path = raw_path(dir, source);
    fs::write(&path, text)?;
    Ok(path)
}

pub fn load_raw(dir: &Path, source: Source) -> io::Result<String> {
    fs::read_to_string(raw_path(dir, source))
}

// src/progress.rs
use crate::fetch::Source;

/// Progress reporting for a refresh of the sheet sources.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources being fetched.
    fn begin(&mut self, _total: usize) {}

    /// One source downloaded.
    fn item_done(&mut self, _source: Source) {}

    /// One source failed; the rest keep going.
    fn item_failed(&mut self, _source: Source, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

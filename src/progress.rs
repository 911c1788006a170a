// src/progress.rs
/// Per-source progress for long runs.
/// Frontends implement this to surface status; the library only calls it.
pub trait Progress {
    /// Called at the start with the number of sources.
    fn begin(&mut self, _total: usize) {}

    /// A source was fetched and scanned; `candidates` were found, `kept` were new.
    fn item_done(&mut self, _label: &str, _candidates: usize, _kept: usize) {}

    /// A source could not be fetched and was skipped.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

// src/progress.rs
use crate::runner::RunSummary;
use crate::records::matches::MatchSummary;

/// Lightweight progress reporting for a pipeline run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called once the number of qualifying matches is known.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called after a match's point file has been written.
    fn match_saved(&mut self, _summary: &MatchSummary) {}

    /// Called after the index is written.
    fn finish(&mut self, _summary: &RunSummary) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

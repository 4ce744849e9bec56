// src/progress.rs
/// Lightweight progress reporting for the one slow operation (the fetch).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called when work starts, with a short description.
    fn begin(&mut self, _what: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

// src/config/state.rs
use crate::collection::SavedCollection;
use crate::compare::{Comparison, CompareSelection};
use crate::record::CollegeRecord;

/// Everything the front end renders from. Mutated only through `App` commands.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Record on screen (fresh search result or loaded from saved)
    pub current: Option<CollegeRecord>,

    /// Persisted searches, insertion order
    pub saved: SavedCollection,

    /// Keys ticked for side-by-side view (at most 2)
    pub selection: CompareSelection,

    /// Active side-by-side view; `Some` means comparison mode
    pub comparing: Option<Comparison>,

    /// A fetch is outstanding
    pub loading: bool,

    /// User-visible error line
    pub error: Option<String>,

    /// Bumped on every search start and cancel; late responses carry an older value
    pub generation: u64,
}

impl AppState {
    pub fn is_comparing(&self) -> bool {
        self.comparing.is_some()
    }

    /// Idle: nothing in flight and no error showing.
    pub fn is_idle(&self) -> bool {
        !self.loading && self.error.is_none()
    }
}

// src/app.rs
//
// Command layer. Every user action is one method here; each one leaves the
// state idle (not loading) or with exactly one fetch outstanding. Saved
// collection changes are written through to the store immediately.

use std::path::PathBuf;

use crate::collection::SavedCollection;
use crate::compare::{compare, CompareError};
use crate::config::consts::{MSG_EMPTY_NAME, MSG_FETCH_FAILED};
use crate::config::state::AppState;
use crate::core::sanitize::normalize_ws;
use crate::export::{export_filename, to_csv, ExportError};
use crate::fetch::{CollegeSource, FetchError};
use crate::file::Delivery;
use crate::identity::IdentityKey;
use crate::progress::Progress;
use crate::record::CollegeRecord;
use crate::store::{KeyValueStore, SavedStore, StoreError};

/// Proof that a search was started. Its result is only applied while the
/// ticket's generation is still the current one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub college_name: String,
    pub major: Option<String>,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct App<S: KeyValueStore> {
    state: AppState,
    store: SavedStore<S>,
}

impl<S: KeyValueStore> App<S> {
    /// Open the saved collection under `key` in `backend`.
    pub fn new(backend: S, key: &str) -> Self {
        Self::with_store(SavedStore::new(backend, key))
    }

    pub fn with_store(mut store: SavedStore<S>) -> Self {
        let saved = store.load();
        Self {
            state: AppState { saved, ..AppState::default() },
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn saved(&self) -> &SavedCollection {
        &self.state.saved
    }

    pub fn store(&self) -> &SavedStore<S> {
        &self.store
    }

    /// Write the collection through. Failures are logged; memory stays authoritative.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.state.saved) {
            loge!("App: could not persist saved searches: {e}");
        }
    }

    /* ---------------- Search ---------------- */

    /// Validate and enter the loading state. `None` means nothing was started:
    /// either the name is blank (error set) or a fetch is already outstanding.
    pub fn begin_search(&mut self, college_name: &str, major: Option<&str>) -> Option<SearchTicket> {
        let name = normalize_ws(college_name);
        if name.is_empty() {
            self.state.error = Some(s!(MSG_EMPTY_NAME));
            return None;
        }
        if self.state.loading {
            logw!("App: search for {name:?} rejected, one is already running");
            return None;
        }

        let major = major.map(normalize_ws).filter(|m| !m.is_empty());

        self.state.generation = self.state.generation.wrapping_add(1);
        self.state.loading = true;
        self.state.error = None;
        self.state.current = None;
        self.state.comparing = None;

        logf!("App: searching {name:?} (major {major:?}), generation {}", self.state.generation);
        Some(SearchTicket {
            generation: self.state.generation,
            college_name: name,
            major,
        })
    }

    /// Apply a fetch result. Returns false when the ticket is stale and the
    /// result was dropped.
    pub fn finish_search(&mut self, ticket: SearchTicket, result: Result<CollegeRecord, FetchError>) -> bool {
        if !self.state.loading || ticket.generation != self.state.generation {
            logd!(
                "App: dropping stale result for {:?} (generation {} vs {})",
                ticket.college_name, ticket.generation, self.state.generation
            );
            return false;
        }

        self.state.loading = false;
        match result {
            Ok(record) => {
                logf!("App: loaded {:?}", record.college_name);
                // the major is the caller's, whatever the source sent
                self.state.current = Some(record.with_major(ticket.major.as_deref()));
            }
            Err(e) => {
                loge!("App: fetch for {:?} failed: {e}", ticket.college_name);
                self.state.error = Some(s!(MSG_FETCH_FAILED));
            }
        }
        true
    }

    /// Abandon the outstanding fetch; its result will be dropped.
    pub fn cancel_search(&mut self) {
        if self.state.loading {
            self.state.generation = self.state.generation.wrapping_add(1);
            self.state.loading = false;
            logd!("App: search cancelled");
        }
    }

    /// Blocking search: begin, fetch, finish. Returns whether a record is now current.
    pub fn search(
        &mut self,
        source: &dyn CollegeSource,
        college_name: &str,
        major: Option<&str>,
        mut progress: Option<&mut dyn Progress>,
    ) -> bool {
        let Some(ticket) = self.begin_search(college_name, major) else {
            return false;
        };

        if let Some(p) = progress.as_deref_mut() {
            p.begin(&format!("Fetching {}", ticket.college_name));
        }
        let result = source.fetch_college_info(&ticket.college_name, ticket.major.as_deref());
        if let Some(p) = progress.as_deref_mut() {
            if let Err(e) = &result {
                p.log(&e.to_string());
            }
            p.finish(result.is_ok());
        }

        self.finish_search(ticket, result) && self.state.current.is_some()
    }

    /* ---------------- Saved collection ---------------- */

    /// Save a record unless its identity is already saved. Returns whether it was added.
    pub fn save(&mut self, record: CollegeRecord) -> bool {
        let key = record.identity();
        if !self.state.saved.add(record) {
            logd!("App: {key} already saved");
            return false;
        }
        logf!("App: saved {key}");
        self.persist();
        true
    }

    pub fn save_current(&mut self) -> bool {
        match self.state.current.clone() {
            Some(record) => self.save(record),
            None => false,
        }
    }

    /// Remove from the collection and the compare selection; clears the
    /// current record if it is the one removed.
    pub fn remove(&mut self, key: &IdentityKey) -> Option<CollegeRecord> {
        let removed = self.state.saved.remove(key);
        self.state.selection.remove(key);
        if self.state.current.as_ref().is_some_and(|c| &c.identity() == key) {
            self.state.current = None;
        }
        if removed.is_some() {
            logf!("App: removed {key}");
            self.persist();
        }
        removed
    }

    /// Show a saved record. Any outstanding search is abandoned.
    pub fn load(&mut self, key: &IdentityKey) -> bool {
        let Some(record) = self.state.saved.find(key).cloned() else {
            logd!("App: nothing saved under {key}");
            return false;
        };
        self.state.generation = self.state.generation.wrapping_add(1);
        self.state.current = Some(record);
        self.state.error = None;
        self.state.loading = false;
        self.state.comparing = None;
        true
    }

    /// Drop every saved record.
    pub fn clear_saved(&mut self) -> Result<(), StoreError> {
        self.store.clear()?;
        self.state.saved = SavedCollection::new();
        self.state.selection.clear();
        self.state.comparing = None;
        Ok(())
    }

    pub fn is_current_saved(&self) -> bool {
        self.state
            .current
            .as_ref()
            .is_some_and(|c| self.state.saved.contains(&c.identity()))
    }

    /* ---------------- Comparison ---------------- */

    /// Returns whether `key` is selected afterwards.
    pub fn toggle_compare(&mut self, key: IdentityKey) -> bool {
        self.state.selection.toggle(key)
    }

    /// Enter comparison mode. On error nothing changes.
    pub fn start_comparison(&mut self) -> Result<(), CompareError> {
        let cmp = compare(&self.state.saved, self.state.selection.keys())?;
        logf!("App: comparing {:?} and {:?}", cmp.left_name, cmp.right_name);
        self.state.comparing = Some(cmp);
        self.state.current = None;
        self.state.error = None;
        Ok(())
    }

    pub fn clear_comparison(&mut self) {
        self.state.comparing = None;
        self.state.selection.clear();
    }

    /* ---------------- Export ---------------- */

    pub fn export_csv(&self, record: &CollegeRecord, delivery: &mut dyn Delivery) -> Result<PathBuf, ExportError> {
        let filename = export_filename(&record.college_name);
        delivery.deliver(&filename, &to_csv(record))
    }
}

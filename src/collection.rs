// src/collection.rs
//
// Saved collection: the user's kept searches.
//
// - Insertion order is display order.
// - At most one record per IdentityKey; a duplicate add is a silent no-op and
//   the first-saved copy wins.
// - Serialized as a bare JSON array of records (the store blob).

use serde::{Deserialize, Serialize, Serializer};

use crate::identity::IdentityKey;
use crate::record::CollegeRecord;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Vec<CollegeRecord>")]
pub struct SavedCollection {
    records: Vec<CollegeRecord>,
}

/// True iff any member shares the candidate's identity.
pub fn is_duplicate(collection: &SavedCollection, candidate: &CollegeRecord) -> bool {
    collection.contains(&candidate.identity())
}

impl SavedCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary records, keeping the first of any duplicates.
    pub fn from_records(records: Vec<CollegeRecord>) -> Self {
        let mut out = Self::new();
        for r in records {
            if !out.add(r) {
                logd!("Saved: dropped duplicate while rebuilding collection");
            }
        }
        out
    }

    /// Append unless a record with the same identity exists. Returns whether it was added.
    pub fn add(&mut self, record: CollegeRecord) -> bool {
        if is_duplicate(self, &record) {
            return false;
        }
        self.records.push(record);
        true
    }

    /// Remove the record with exactly this key, if present.
    pub fn remove(&mut self, key: &IdentityKey) -> Option<CollegeRecord> {
        let ix = self.position(key)?;
        Some(self.records.remove(ix))
    }

    pub fn find(&self, key: &IdentityKey) -> Option<&CollegeRecord> {
        self.records.iter().find(|r| &r.identity() == key)
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.position(key).is_some()
    }

    pub fn position(&self, key: &IdentityKey) -> Option<usize> {
        self.records.iter().position(|r| &r.identity() == key)
    }

    pub fn get(&self, ix: usize) -> Option<&CollegeRecord> {
        self.records.get(ix)
    }

    pub fn keys(&self) -> impl Iterator<Item = IdentityKey> + '_ {
        self.records.iter().map(IdentityKey::of)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollegeRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[CollegeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CollegeRecord>> for SavedCollection {
    fn from(records: Vec<CollegeRecord>) -> Self {
        Self::from_records(records)
    }
}

impl Serialize for SavedCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.records)
    }
}

impl<'a> IntoIterator for &'a SavedCollection {
    type Item = &'a CollegeRecord;
    type IntoIter = std::slice::Iter<'a, CollegeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

// src/identity.rs
//
// Record identity.
//
// A saved search is identified by the college name plus the major the user
// typed, both case-folded: "MIT"/"CS" and "mit"/"cs" are the same entity,
// and "no major" equals "empty major". Every call site (dedup, remove, load,
// compare, "is this saved") goes through `IdentityKey`; never build the key
// string by hand.

use std::fmt;

use crate::record::CollegeRecord;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IdentityKey(String);

impl IdentityKey {
    /// `lowercase(name) + "-" + lowercase(major or "")`
    pub fn new(college_name: &str, major: Option<&str>) -> Self {
        let name = college_name.to_lowercase();
        let major = major.unwrap_or("").to_lowercase();
        Self(join!(&name, "-", &major))
    }

    pub fn of(record: &CollegeRecord) -> Self {
        Self::new(&record.college_name, record.user_input_major.as_deref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdentityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&CollegeRecord> for IdentityKey {
    fn from(record: &CollegeRecord) -> Self {
        Self::of(record)
    }
}

impl CollegeRecord {
    pub fn identity(&self) -> IdentityKey {
        IdentityKey::of(self)
    }
}

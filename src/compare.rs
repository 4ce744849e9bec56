// src/compare.rs
//
// Side-by-side comparison of two saved records.
//
// Selection is a bounded set of identity keys (at most MAX_COMPARE, in tick
// order). A comparison is built only from exactly two keys that both resolve
// in the saved collection; anything else is an error and no partial output.

use thiserror::Error;

use crate::collection::SavedCollection;
use crate::config::consts::{MAX_COMPARE, NA, TOP_RECRUITERS_SHOWN};
use crate::derive::{average_annual_cost, display_rate, format_currency};
use crate::heuristics::premed::{PreMedInfo, PreMedStrategy, TrackScan};
use crate::identity::IdentityKey;
use crate::record::{CareerOutcome, CollegeRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("cannot compare: need exactly {MAX_COMPARE} selected colleges, have {0}")]
    WrongSelection(usize),

    #[error("cannot compare: {0} is not in the saved collection")]
    Missing(IdentityKey),
}

/* ---------------- Selection ---------------- */

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareSelection {
    keys: Vec<IdentityKey>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect. Selecting while full is ignored.
    /// Returns whether `key` is selected afterwards.
    pub fn toggle(&mut self, key: IdentityKey) -> bool {
        if let Some(ix) = self.keys.iter().position(|k| *k == key) {
            self.keys.remove(ix);
            return false;
        }
        if self.is_full() {
            logd!("Compare: selection full, ignoring {key}");
            return false;
        }
        self.keys.push(key);
        true
    }

    pub fn remove(&mut self, key: &IdentityKey) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        before != self.keys.len()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    pub fn keys(&self) -> &[IdentityKey] {
        &self.keys
    }

    pub fn contains(&self, key: &IdentityKey) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.keys.len() >= MAX_COMPARE
    }
}

/* ---------------- Output ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonSection {
    pub title: &'static str,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Comparison {
    pub left_name: String,
    pub right_name: String,
    pub sections: Vec<ComparisonSection>,
}

impl Comparison {
    pub fn section(&self, title: &str) -> Option<&ComparisonSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// First row with this label across all sections.
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.sections.iter().flat_map(|s| &s.rows).find(|r| r.label == label)
    }
}

/* ---------------- Engine ---------------- */

/// Compare the two selected records with the default pre-med scan.
pub fn compare(saved: &SavedCollection, keys: &[IdentityKey]) -> Result<Comparison, CompareError> {
    compare_with(saved, keys, &TrackScan)
}

pub fn compare_with(
    saved: &SavedCollection,
    keys: &[IdentityKey],
    premed: &dyn PreMedStrategy,
) -> Result<Comparison, CompareError> {
    let [a, b] = keys else {
        return Err(CompareError::WrongSelection(keys.len()));
    };
    let left = saved.find(a).ok_or_else(|| CompareError::Missing(a.clone()))?;
    let right = saved.find(b).ok_or_else(|| CompareError::Missing(b.clone()))?;
    Ok(compare_records(left, right, premed))
}

/// Field-by-field view of two records. Never fails.
pub fn compare_records(left: &CollegeRecord, right: &CollegeRecord, premed: &dyn PreMedStrategy) -> Comparison {
    let (l, r) = (Facts::of(left, premed), Facts::of(right, premed));

    let sections = vec![
        section("Key Metrics", &l, &r, &[
            ("Graduation Rate", |f| display_rate(f.rec.four_year_graduation_rate)),
            ("Avg. Annual Cost", |f| format_currency(average_annual_cost(&f.rec.cost_of_attendance))),
            ("Median Earnings", |f| f.median_salary()),
            ("Acceptance Rate", |f| display_rate(f.rec.acceptance_rate)),
            ("Student Population", |f| or_na!(&f.rec.student_population)),
            ("Student:Faculty Ratio", |f| or_na!(&f.rec.other_details.student_faculty_ratio)),
        ]),
        section("Admissions", &l, &r, &[
            ("Average GPA", |f| or_na!(&f.rec.admission_requirements.avg_gpa)),
            ("SAT Range", |f| or_na!(&f.rec.admission_requirements.sat_range)),
            ("ACT Range", |f| or_na!(&f.rec.admission_requirements.act_range)),
            ("Test Policy", |f| or_na!(&f.rec.admission_requirements.test_policy)),
        ]),
        section("Academics & Pre-Med", &l, &r, &[
            ("Pre-Med Concentration", |f| f.premed.track.clone()),
            ("MCAT Preparation", |f| f.premed.mcat_prep.clone()),
        ]),
        section("Recruitment", &l, &r, &[
            ("Top Recruiters", |f| f.recruiters(|o| &o.top_recruiters)),
            ("Top Local Recruiters", |f| f.recruiters(|o| &o.local_recruiters)),
        ]),
        section("Application Deadlines", &l, &r, &[
            ("Regular Decision", |f| or_na!(&f.rec.other_details.regular_decision_deadline)),
            ("Early Action", |f| or_na!(&f.rec.other_details.early_action_deadline)),
            ("Early Decision", |f| or_na!(&f.rec.other_details.early_decision_deadline)),
        ]),
        section("Cost Breakdown (In-State)", &l, &r, &[
            ("Tuition", |f| format_currency(f.rec.cost_of_attendance.in_state_tuition)),
            ("Room & Board", |f| format_currency(f.rec.cost_of_attendance.room_and_board)),
            ("Books & Food", |f| {
                let c = &f.rec.cost_of_attendance;
                format_currency(c.books + c.food)
            }),
        ]),
    ];

    Comparison {
        left_name: s!(&left.college_name),
        right_name: s!(&right.college_name),
        sections,
    }
}

/// Per-record values computed once and shared by every row.
struct Facts<'a> {
    rec: &'a CollegeRecord,
    latest: Option<&'a CareerOutcome>,
    premed: PreMedInfo,
}

impl<'a> Facts<'a> {
    fn of(rec: &'a CollegeRecord, premed: &dyn PreMedStrategy) -> Self {
        Self {
            rec,
            latest: rec.latest_career_outcome(),
            premed: premed.pre_med_info(rec),
        }
    }

    fn median_salary(&self) -> String {
        match self.latest {
            Some(o) => or_na!(&o.median_starting_salary),
            None => s!(NA),
        }
    }

    fn recruiters(&self, pick: impl Fn(&CareerOutcome) -> &Vec<String>) -> String {
        let Some(latest) = self.latest else { return s!(NA) };
        let shown: Vec<&str> = pick(latest)
            .iter()
            .take(TOP_RECRUITERS_SHOWN)
            .map(String::as_str)
            .collect();
        or_na!(&shown.join(", "))
    }
}

type Cell = fn(&Facts<'_>) -> String;

fn section(title: &'static str, l: &Facts<'_>, r: &Facts<'_>, cells: &[(&'static str, Cell)]) -> ComparisonSection {
    let rows = cells
        .iter()
        .map(|&(label, cell)| ComparisonRow { label, left: cell(l), right: cell(r) })
        .collect();
    ComparisonSection { title, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> IdentityKey {
        IdentityKey::new(name, None)
    }

    #[test]
    fn selection_is_bounded_to_two() {
        let mut sel = CompareSelection::new();
        assert!(sel.toggle(key("A")));
        assert!(sel.toggle(key("B")));
        assert!(!sel.toggle(key("C")));
        assert_eq!(sel.keys(), &[key("A"), key("B")]);
    }

    #[test]
    fn toggle_twice_deselects() {
        let mut sel = CompareSelection::new();
        sel.toggle(key("A"));
        assert!(!sel.toggle(key("A")));
        assert!(sel.is_empty());
    }

    #[test]
    fn wrong_selection_size_is_an_error() {
        let saved = SavedCollection::from_records(vec![CollegeRecord::named("A")]);
        assert_eq!(compare(&saved, &[key("A")]), Err(CompareError::WrongSelection(1)));
        assert_eq!(compare(&saved, &[]), Err(CompareError::WrongSelection(0)));
    }

    #[test]
    fn unresolved_key_is_an_error() {
        let saved = SavedCollection::from_records(vec![CollegeRecord::named("A")]);
        assert_eq!(
            compare(&saved, &[key("A"), key("Gone")]),
            Err(CompareError::Missing(key("Gone")))
        );
    }

    #[test]
    fn section_order_is_fixed() {
        let saved = SavedCollection::from_records(vec![CollegeRecord::named("A"), CollegeRecord::named("B")]);
        let cmp = compare(&saved, &[key("A"), key("B")]).unwrap();
        let titles: Vec<&str> = cmp.sections.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec![
            "Key Metrics",
            "Admissions",
            "Academics & Pre-Med",
            "Recruitment",
            "Application Deadlines",
            "Cost Breakdown (In-State)",
        ]);
        assert_eq!((cmp.left_name.as_str(), cmp.right_name.as_str()), ("A", "B"));
        assert_eq!(cmp.row("Median Earnings").unwrap().left, "N/A");
        assert_eq!(cmp.row("Top Recruiters").unwrap().right, "N/A");
    }
}

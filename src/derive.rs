// src/derive.rs
//
// Derived presentation values. Pure functions over a record or one of its
// fields; nothing here touches state or storage.
//
// Conventions shared by every caller:
// - cost 0 means "not available": summed as 0, rendered as "N/A";
// - career outcomes are ordered by numeric year, newest first, with a
//   stable sort (equal years keep arrival order, unparseable years last).

use std::cmp::Reverse;

use crate::config::consts::NA;
use crate::record::{
    CareerOutcome, Club, CollegeRecord, CostOfAttendance, Scholarship, StudentOpportunity,
};

/// Blank or the "N/A" placeholder.
pub fn is_unknown(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == NA
}

/* ---------------- Career outcomes ---------------- */

/// Leading-integer parse: "2023" -> 2023, "2022-23" -> 2022, "n/a" -> None.
pub fn year_value(year: &str) -> Option<i64> {
    let t = year.trim();
    let (sign, digits) = match t.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, t.strip_prefix('+').unwrap_or(t)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|v| sign * v)
}

/// Newest first.
pub fn sorted_career_outcomes(outcomes: &[CareerOutcome]) -> Vec<&CareerOutcome> {
    let mut v: Vec<&CareerOutcome> = outcomes.iter().collect();
    v.sort_by_key(|o| Reverse(year_value(&o.year)));
    v
}

pub fn latest_career_outcome(outcomes: &[CareerOutcome]) -> Option<&CareerOutcome> {
    sorted_career_outcomes(outcomes).into_iter().next()
}

/* ---------------- Costs ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TuitionTier {
    InState,
    OutOfState,
    International,
}

impl TuitionTier {
    pub const ALL: [TuitionTier; 3] = [Self::InState, Self::OutOfState, Self::International];

    pub fn tuition(self, cost: &CostOfAttendance) -> f64 {
        match self {
            Self::InState => cost.in_state_tuition,
            Self::OutOfState => cost.out_of_state_tuition,
            Self::International => cost.international_tuition,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InState => "In-State",
            Self::OutOfState => "Out-of-State",
            Self::International => "International",
        }
    }
}

/// In-state tuition + room & board + books + food. Other tuition tiers
/// and travel are not included.
pub fn average_annual_cost(cost: &CostOfAttendance) -> f64 {
    cost.in_state_tuition + cost.room_and_board + cost.books + cost.food
}

/// Tier tuition + room & board + books + food + travel.
pub fn total_annual_cost(cost: &CostOfAttendance, tier: TuitionTier) -> f64 {
    tier.tuition(cost) + cost.room_and_board + cost.books + cost.food + cost.travel_expenses
}

/// "$12,345" for positive amounts (rounded to whole dollars), else "N/A".
pub fn format_currency(n: f64) -> String {
    if !(n > 0.0) || !n.is_finite() {
        return s!(NA);
    }
    let whole = n.round() as u64;
    join!("$", &group_thousands(whole))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// "85%" for positive rates, else "N/A".
pub fn display_rate(n: f64) -> String {
    if n > 0.0 && n.is_finite() { format!("{n}%") } else { s!(NA) }
}

/// One pie slice of the cost chart.
#[derive(Clone, Debug, PartialEq)]
pub struct CostSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Cost chart breakdown, zero items dropped.
pub fn cost_breakdown(cost: &CostOfAttendance) -> Vec<CostSlice> {
    [
        ("Out-of-State Tuition", cost.out_of_state_tuition),
        ("Room & Board", cost.room_and_board),
        ("Books & Supplies", cost.books),
        ("Food Expenses", cost.food),
        ("Travel Expenses", cost.travel_expenses),
    ]
    .into_iter()
    .filter(|(_, v)| *v > 0.0)
    .map(|(label, value)| CostSlice { label, value })
    .collect()
}

/* ---------------- Grouping ---------------- */

/// Ordered groups: first-seen group order, insertion order inside a group.
pub type Groups<'a, T> = Vec<(String, Vec<&'a T>)>;

/// Group `items` by `key_fn`; `None` or blank keys land in `default_key`.
/// A literal "N/A" is a key like any other.
pub fn group_by<'a, T, F>(items: &'a [T], key_fn: F, default_key: &str) -> Groups<'a, T>
where
    F: Fn(&T) -> Option<&str>,
{
    let mut groups: Groups<'a, T> = Vec::new();
    for item in items {
        let key = key_fn(item)
            .filter(|k| !k.trim().is_empty())
            .unwrap_or(default_key);
        match groups.iter().position(|(k, _)| k == key) {
            Some(ix) => groups[ix].1.push(item),
            None => groups.push((s!(key), vec![item])),
        }
    }
    groups
}

pub fn clubs_by_category(clubs: &[Club]) -> Groups<'_, Club> {
    group_by(clubs, |c| Some(c.category.as_str()), "General")
}

pub fn opportunities_by_type(opps: &[StudentOpportunity]) -> Groups<'_, StudentOpportunity> {
    group_by(opps, |o| Some(o.kind.as_str()), "Other")
}

/// Opportunity groups worth their own section (volunteering and career
/// enhancement are shown elsewhere).
pub fn relevant_opportunity_types(opps: &[StudentOpportunity]) -> Vec<String> {
    opportunities_by_type(opps)
        .into_iter()
        .map(|(k, _)| k)
        .filter(|k| k != "Volunteering" && k != "Career Enhancement")
        .collect()
}

/// Scholarship count per type, first-seen order; missing type counts as "N/A".
pub fn scholarship_type_counts(scholarships: &[Scholarship]) -> Vec<(String, usize)> {
    group_by(scholarships, |s| Some(s.kind.as_str()), NA)
        .into_iter()
        .map(|(k, v)| (k, v.len()))
        .collect()
}

/* ---------------- Misc record views ---------------- */

/// Show pre-med preparation tips: no major given, or a medicine-adjacent one.
pub fn shows_pre_med_tips(major: Option<&str>) -> bool {
    const MED_TERMS: [&str; 7] = ["med", "doctor", "health", "biology", "science", "nurse", "clinical"];
    match major.map(str::trim).filter(|m| !m.is_empty()) {
        None => true,
        Some(m) => {
            let m = m.to_lowercase();
            MED_TERMS.iter().any(|t| m.contains(t))
        }
    }
}

impl CollegeRecord {
    pub fn latest_career_outcome(&self) -> Option<&CareerOutcome> {
        latest_career_outcome(&self.career_outcomes)
    }

    pub fn average_annual_cost(&self) -> f64 {
        average_annual_cost(&self.cost_of_attendance)
    }
}

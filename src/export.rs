// src/export.rs
//
// Single-record CSV export.
//
// Layout: one fixed header line of 53 columns, one data line, joined by "\n"
// with no trailing newline. Array columns are formatted per item and joined
// with "; " (plain name lists use ", "); an empty array is "N/A".

use std::path::PathBuf;

use thiserror::Error;

use crate::config::consts::{EXPORT_SUFFIX, NA};
use crate::core::sanitize::{flatten_newlines, underscore_ws_lower};
use crate::csv::join_row;
use crate::derive::sorted_career_outcomes;
use crate::record::{CareerOutcome, CollegeRecord};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path exists but is not a directory: {0}")]
    NotADirectory(PathBuf),
}

pub const HEADERS: [&str; 53] = [
    "College Name", "Location", "Website", "Phone", "School Type", "Setting", "Campus Housing",
    "Student Population", "Awards Offered",
    "Acceptance Rate (%)", "4-Year Graduation Rate (%)", "Avg GPA", "Min GPA", "SAT Range",
    "ACT Range", "Test Policy", "Essay Required",
    "In-State Tuition ($)", "Out-of-State Tuition ($)", "International Tuition ($)",
    "Room & Board ($)", "Books ($)", "Food ($)", "Travel Expenses ($)",
    "Regular Decision Deadline", "Early Action Deadline", "Early Decision Deadline",
    "Student:Faculty Ratio",
    "Scholarships", "Academic Tracks", "Student Opportunities", "Clubs",
    "Nearby Places", "Campus Commute Summary", "Free Commute Services",
    "Career Outcomes History", "Top Recruiters (Combined)", "Top Local Recruiters (Combined)",
    "FAANG Presence", "FAANG Companies", "FAANG Recruitment Summary",
    "Notable Alumni",
    "Counselor Name", "Counselor Email", "Counselor Phone", "Upcoming Visits", "Application Link",
    "Short Note", "Princeton Review Listed", "Princeton Review Summary", "Princeton Review Pros",
    "Princeton Review Cons", "Essay Prompts",
];

/* ---------------- Cell formatters ---------------- */

fn yes_no(b: bool) -> String {
    s!(if b { "Yes" } else { "No" })
}

/// Integral values print without a fractional part ("85", "12.5").
fn number(n: f64) -> String {
    format!("{n}")
}

/// Per-item formatter joined by "; ", "N/A" when empty.
fn items<T>(list: &[T], fmt: impl Fn(&T) -> String) -> String {
    if list.is_empty() {
        return s!(NA);
    }
    list.iter().map(fmt).collect::<Vec<_>>().join("; ")
}

/// Plain names joined by ", ", "N/A" when empty.
fn names<S: AsRef<str>>(list: &[S]) -> String {
    if list.is_empty() {
        return s!(NA);
    }
    list.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

fn career_history(outcomes: &[CareerOutcome]) -> String {
    if outcomes.is_empty() {
        return s!(NA);
    }
    sorted_career_outcomes(outcomes)
        .iter()
        .map(|o| format!("({}: Placement={}, Salary={})", o.year, o.placement_rate, o.median_starting_salary))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Every year's list flattened, first occurrence kept.
fn combined_recruiters<'a>(outcomes: &'a [CareerOutcome], pick: impl Fn(&'a CareerOutcome) -> &'a [String]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for name in outcomes.iter().flat_map(pick) {
        if !seen.contains(&name.as_str()) {
            seen.push(name);
        }
    }
    names(&seen)
}

/* ---------------- Row ---------------- */

/// Raw (unescaped) cells in header order.
pub fn export_row(r: &CollegeRecord) -> Vec<String> {
    let adm = &r.admission_requirements;
    let cost = &r.cost_of_attendance;
    let other = &r.other_details;
    let faang = &r.faang_recruitment;
    let review = &r.princeton_review_status;

    vec![
        s!(&r.college_name),
        s!(&r.location),
        s!(&r.website),
        s!(&r.general_phone),
        s!(&r.school_type),
        s!(&r.setting),
        yes_no(r.campus_housing),
        s!(&r.student_population),
        names(&r.awards_offered),
        number(r.acceptance_rate),
        number(r.four_year_graduation_rate),
        s!(&adm.avg_gpa),
        s!(&adm.minimum_gpa),
        s!(&adm.sat_range),
        s!(&adm.act_range),
        s!(&adm.test_policy),
        adm.essay_required.to_string(),
        number(cost.in_state_tuition),
        number(cost.out_of_state_tuition),
        number(cost.international_tuition),
        number(cost.room_and_board),
        number(cost.books),
        number(cost.food),
        number(cost.travel_expenses),
        s!(&other.regular_decision_deadline),
        s!(&other.early_action_deadline),
        s!(&other.early_decision_deadline),
        s!(&other.student_faculty_ratio),
        items(&r.scholarships, |s| format!("{} ({}, {})", s.name, s.amount, s.kind)),
        items(&r.academic_tracks, |t| format!("{}: {}", t.major, flatten_newlines(&t.description))),
        items(&r.student_opportunities, |o| {
            format!("{} ({}) - Timeline: {}", o.name, o.kind, o.application_timeline)
        }),
        names(&r.clubs.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()),
        items(&r.nearby_places, |p| {
            format!(
                "{} ({}) - {} [Free Transport: {}]: {}",
                p.name,
                p.category,
                p.distance_from_college,
                yes_no(p.free_transport_available),
                p.description
            )
        }),
        s!(&r.campus_commute.summary),
        names(&r.campus_commute.free_services),
        career_history(&r.career_outcomes),
        combined_recruiters(&r.career_outcomes, |o| o.top_recruiters.as_slice()),
        combined_recruiters(&r.career_outcomes, |o| o.local_recruiters.as_slice()),
        yes_no(faang.has_presence),
        names(&faang.known_companies),
        s!(&faang.recruitment_summary),
        items(&r.famous_alumni, |a| format!("{} ({}) - {}", a.name, a.grad_year, a.current_title)),
        s!(&r.counselor_info.name),
        s!(&r.counselor_info.email),
        s!(&r.counselor_info.phone),
        items(&r.upcoming_visits, |v| format!("{}: {}", v.date, flatten_newlines(&v.description))),
        s!(&r.application_link),
        s!(&r.short_note),
        yes_no(review.is_listed),
        s!(&review.summary),
        names(&review.pros),
        names(&review.cons),
        items(&adm.essay_prompts, |p| format!("{}: {}", p.title, flatten_newlines(&p.text))),
    ]
}

/// Header line + data line, no trailing newline.
pub fn to_csv(record: &CollegeRecord) -> String {
    join!(&join_row(&HEADERS), "\n", &join_row(&export_row(record)))
}

/// "Amherst College" -> "amherst_college_data.csv"
pub fn export_filename(college_name: &str) -> String {
    join!(&underscore_ws_lower(college_name), EXPORT_SUFFIX)
}

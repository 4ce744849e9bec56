// tests/heuristics.rs
//
// Derived values and text heuristics over a full record.

use college_scout::derive::{
    average_annual_cost, cost_breakdown, format_currency, latest_career_outcome,
    opportunities_by_type, relevant_opportunity_types, scholarship_type_counts,
};
use college_scout::heuristics::{extract_deadline, highlight_keywords, pre_med_info, Highlighter, Span};
use college_scout::record::CostOfAttendance;
use college_scout::CollegeRecord;

fn amherst() -> CollegeRecord {
    CollegeRecord::from_json(include_str!("fixtures/college.json")).unwrap()
}

#[test]
fn average_cost_property() {
    let cost = CostOfAttendance {
        in_state_tuition: 1000.0,
        room_and_board: 500.0,
        books: 0.0,
        food: 200.0,
        out_of_state_tuition: 9999.0,
        ..CostOfAttendance::default()
    };
    assert_eq!(average_annual_cost(&cost), 1700.0);
    assert_eq!(format_currency(0.0), "N/A");
    assert_eq!(format_currency(12345.0), "$12,345");
}

#[test]
fn latest_outcome_from_unordered_years() {
    let r = amherst();
    assert_eq!(latest_career_outcome(&r.career_outcomes).unwrap().year, "2023");
}

#[test]
fn keyword_spans() {
    assert_eq!(
        highlight_keywords("GPA requirement", &["gpa"]),
        vec![Span::Keyword("GPA"), Span::Plain(" requirement")]
    );
    assert_eq!(highlight_keywords("gpax", &["gpa"]), vec![Span::Plain("gpax")]);
}

#[test]
fn scholarship_description_scan() {
    let r = amherst();
    let grant = &r.scholarships[0];
    assert_eq!(extract_deadline(&grant.description).as_deref(), Some("January 5, 2026"));
    assert_eq!(
        Highlighter::default_vocabulary().mark(&grant.description),
        "**Need-based** aid for **first-year** and **transfer** students. Application **deadline**: January 5, 2026."
    );
    assert_eq!(extract_deadline(&r.scholarships[1].description), None);
}

#[test]
fn scholarship_types_in_first_seen_order() {
    let counts = scholarship_type_counts(&amherst().scholarships);
    assert_eq!(counts, vec![("Institutional".to_string(), 1), ("Third-Party".to_string(), 1)]);
}

#[test]
fn opportunity_grouping() {
    let r = amherst();
    let groups = opportunities_by_type(&r.student_opportunities);
    let kinds: Vec<&str> = groups.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(kinds, vec!["Research", "Volunteering"]);
    assert_eq!(relevant_opportunity_types(&r.student_opportunities), vec!["Research".to_string()]);
}

#[test]
fn cost_chart_slices() {
    let labels: Vec<&str> = cost_breakdown(&amherst().cost_of_attendance).iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        vec!["Out-of-State Tuition", "Room & Board", "Books & Supplies", "Food Expenses", "Travel Expenses"]
    );
}

#[test]
fn pre_med_from_fixture() {
    let info = pre_med_info(&amherst());
    assert_eq!(info.track, "Biology");
    assert_eq!(info.mcat_prep, "Students get MCAT practice exams and mentoring.");
}

// tests/export_csv.rs
use std::fs;

use college_scout::export::{export_filename, export_row, to_csv, HEADERS};
use college_scout::file::{Delivery, DirDelivery};
use college_scout::store::MemoryStore;
use college_scout::{App, CollegeRecord};

fn amherst() -> CollegeRecord {
    CollegeRecord::from_json(include_str!("fixtures/college.json")).unwrap()
}

fn cell(row: &[String], header: &str) -> String {
    let ix = HEADERS.iter().position(|h| *h == header).unwrap_or_else(|| panic!("no header {header}"));
    row[ix].clone()
}

#[test]
fn header_line_is_fixed() {
    let csv = to_csv(&amherst());
    let header = csv.lines().next().unwrap();
    assert!(header.starts_with("College Name,Location,Website,Phone,"));
    assert!(header.ends_with(",Princeton Review Cons,Essay Prompts"));
    assert_eq!(HEADERS.len(), 53);
}

#[test]
fn two_lines_no_trailing_newline() {
    let csv = to_csv(&CollegeRecord::named("Plain"));
    assert!(!csv.ends_with('\n'));
    assert_eq!(csv.matches('\n').count(), 1);
}

#[test]
fn scalar_and_list_cells() {
    let row = export_row(&amherst());
    assert_eq!(cell(&row, "Campus Housing"), "Yes");
    assert_eq!(cell(&row, "Acceptance Rate (%)"), "9");
    assert_eq!(cell(&row, "Essay Required"), "true");
    assert_eq!(cell(&row, "In-State Tuition ($)"), "66650");
    assert_eq!(
        cell(&row, "Scholarships"),
        "Amherst Need-Based Grant (Full demonstrated need, Institutional); National Merit Scholarship ($2,500, Third-Party)"
    );
    assert_eq!(cell(&row, "Clubs"), "Mock Trial, Ultimate Frisbee, Pre-Health Society");
    assert_eq!(
        cell(&row, "Nearby Places"),
        "Antonio's Pizza (Restaurant) - 0.3 miles [Free Transport: No]: Late-night slices."
    );
    assert_eq!(cell(&row, "Essay Prompts"), "Personal Statement: Tell us about yourself, in your own words.");
    assert_eq!(cell(&row, "Princeton Review Pros"), "Small classes, Open curriculum");
}

#[test]
fn career_history_is_newest_first() {
    let row = export_row(&amherst());
    assert_eq!(
        cell(&row, "Career Outcomes History"),
        "(2023: Placement=94%, Salary=$72,000); (2022: Placement=92%, Salary=$68,000); (2021: Placement=90%, Salary=$65,000)"
    );
    assert_eq!(
        cell(&row, "Top Recruiters (Combined)"),
        "Google, Goldman Sachs, McKinsey, Deloitte"
    );
    assert_eq!(cell(&row, "Top Local Recruiters (Combined)"), "MassMutual, Baystate Health");
}

#[test]
fn empty_lists_are_na() {
    let row = export_row(&CollegeRecord::named("Plain"));
    for h in ["Awards Offered", "Scholarships", "Clubs", "Career Outcomes History", "Top Recruiters (Combined)", "Essay Prompts"] {
        assert_eq!(cell(&row, h), "N/A", "{h}");
    }
}

#[test]
fn cells_with_commas_are_quoted() {
    let csv = to_csv(&amherst());
    let data = csv.lines().nth(1).unwrap();
    assert!(data.starts_with("Amherst College,\"Amherst, MA\",https://www.amherst.edu,"));
    assert!(data.contains(",\"1,971 (1,971 undergraduate)\","));
}

#[test]
fn filename_rule() {
    assert_eq!(export_filename("Amherst College"), "amherst_college_data.csv");
}

#[test]
fn delivered_through_app() {
    let dir = tempfile::tempdir().unwrap();
    let app = App::new(MemoryStore::new(), "savedCollegeSearches");
    let mut sink = DirDelivery::new(dir.path().join("out"));

    let path = app.export_csv(&amherst(), &mut sink).unwrap();
    assert_eq!(path, dir.path().join("out").join("amherst_college_data.csv"));
    assert_eq!(fs::read_to_string(&path).unwrap(), to_csv(&amherst()));
}

#[test]
fn delivery_into_a_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("taken");
    fs::write(&blocker, "x").unwrap();
    let mut sink = DirDelivery::new(&blocker);
    assert!(sink.deliver("a.csv", "data").is_err());
}

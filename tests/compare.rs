// tests/compare.rs
use college_scout::collection::SavedCollection;
use college_scout::compare::{compare, compare_with, CompareError, CompareSelection};
use college_scout::heuristics::{PreMedInfo, PreMedStrategy};
use college_scout::record::{CareerOutcome, CostOfAttendance};
use college_scout::{CollegeRecord, IdentityKey};

fn amherst() -> CollegeRecord {
    CollegeRecord::from_json(include_str!("fixtures/college.json"))
        .unwrap()
        .with_major(Some("Biology"))
}

fn sparse() -> CollegeRecord {
    let mut r = CollegeRecord::named("Sparse State");
    r.cost_of_attendance = CostOfAttendance { in_state_tuition: 10_000.0, food: 250.5, ..CostOfAttendance::default() };
    r.career_outcomes = vec![CareerOutcome {
        placement_rate: "80%".into(),
        median_starting_salary: "".into(),
        top_recruiters: Vec::new(),
        local_recruiters: vec!["Acme".into()],
        year: "2024".into(),
    }];
    r
}

fn saved() -> SavedCollection {
    SavedCollection::from_records(vec![amherst(), sparse()])
}

fn keys() -> Vec<IdentityKey> {
    vec![amherst().identity(), sparse().identity()]
}

#[test]
fn full_comparison_values() {
    let cmp = compare(&saved(), &keys()).unwrap();
    assert_eq!(cmp.left_name, "Amherst College");
    assert_eq!(cmp.right_name, "Sparse State");

    let row = |label: &str| {
        let r = cmp.row(label).unwrap_or_else(|| panic!("no row {label}"));
        (r.left.clone(), r.right.clone())
    };

    assert_eq!(row("Graduation Rate"), ("87%".into(), "N/A".into()));
    // 66650 + 17840 + 1000 + 800
    assert_eq!(row("Avg. Annual Cost").0, "$86,290");
    assert_eq!(row("Avg. Annual Cost").1, "$10,251");
    assert_eq!(row("Median Earnings"), ("$72,000".into(), "N/A".into()));
    assert_eq!(row("Student:Faculty Ratio").0, "7:1");
    assert_eq!(row("SAT Range").0, "1460-1560");
    assert_eq!(row("Pre-Med Concentration").0, "Biology");
    assert_eq!(row("MCAT Preparation").0, "Students get MCAT practice exams and mentoring.");
    assert_eq!(row("Pre-Med Concentration").1, "N/A");
    assert_eq!(row("Top Recruiters"), ("Goldman Sachs, McKinsey, Google".into(), "N/A".into()));
    assert_eq!(row("Top Local Recruiters"), ("MassMutual, Baystate Health".into(), "Acme".into()));
    assert_eq!(row("Early Decision").0, "November 1");
    assert_eq!(row("Books & Food").0, "$1,800");
    assert_eq!(row("Room & Board").1, "N/A");
}

#[test]
fn every_section_has_rows() {
    let cmp = compare(&saved(), &keys()).unwrap();
    let counts: Vec<usize> = cmp.sections.iter().map(|s| s.rows.len()).collect();
    assert_eq!(counts, vec![6, 4, 2, 2, 3, 3]);
}

#[test]
fn absent_key_yields_no_partial_result() {
    let mut c = saved();
    c.remove(&sparse().identity());
    assert_eq!(
        compare(&c, &keys()),
        Err(CompareError::Missing(sparse().identity()))
    );
}

#[test]
fn keys_match_case_insensitively() {
    let ks = vec![
        IdentityKey::new("AMHERST COLLEGE", Some("biology")),
        IdentityKey::new("sparse state", None),
    ];
    assert!(compare(&saved(), &ks).is_ok());
}

#[test]
fn selection_drives_comparison() {
    let mut sel = CompareSelection::new();
    for k in keys() {
        sel.toggle(k);
    }
    sel.toggle(IdentityKey::new("Third", None));
    assert_eq!(sel.len(), 2);
    assert!(compare(&saved(), sel.keys()).is_ok());
}

struct Fixed;

impl PreMedStrategy for Fixed {
    fn pre_med_info(&self, record: &CollegeRecord) -> PreMedInfo {
        PreMedInfo { track: record.college_name.to_uppercase(), mcat_prep: "ask".into() }
    }
}

#[test]
fn pre_med_strategy_is_pluggable() {
    let cmp = compare_with(&saved(), &keys(), &Fixed).unwrap();
    let row = cmp.row("Pre-Med Concentration").unwrap();
    assert_eq!((row.left.as_str(), row.right.as_str()), ("AMHERST COLLEGE", "SPARSE STATE"));
    assert_eq!(cmp.row("MCAT Preparation").unwrap().left, "ask");
}

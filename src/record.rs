// src/record.rs
//
// College record model.
//
// One `CollegeRecord` is one generated payload for a (college, major) pair.
// Field names on the wire and in the store are camelCase. Decoding is
// lenient (see core::lenient): unknown text is "N/A", unknown numbers are 0,
// unknown lists are empty. Records are treated as immutable once fetched.

use serde::{Deserialize, Serialize};

use crate::core::lenient::{self, na};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeRecord {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub college_name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub website: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub general_phone: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub school_type: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub setting: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub awards_offered: Vec<String>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub campus_housing: bool,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub student_population: String,
    /// Percent, 0 when unknown
    #[serde(default, deserialize_with = "lenient::number")]
    pub acceptance_rate: f64,
    /// Percent, 0 when unknown
    #[serde(default, deserialize_with = "lenient::number")]
    pub four_year_graduation_rate: f64,
    #[serde(default, deserialize_with = "lenient::object")]
    pub admission_requirements: AdmissionRequirements,
    #[serde(default, deserialize_with = "lenient::object")]
    pub cost_of_attendance: CostOfAttendance,
    #[serde(default, deserialize_with = "lenient::list")]
    pub scholarships: Vec<Scholarship>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub academic_tracks: Vec<AcademicTrack>,
    /// Supplied by the caller at search time, never by the source
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::optional_text"
    )]
    pub user_input_major: Option<String>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub other_details: OtherDetails,
    #[serde(default, deserialize_with = "lenient::list")]
    pub clubs: Vec<Club>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub counselor_info: CounselorInfo,
    #[serde(default, deserialize_with = "lenient::list")]
    pub upcoming_visits: Vec<CollegeVisit>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub student_opportunities: Vec<StudentOpportunity>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub nearby_places: Vec<NearbyPlace>,
    #[serde(default, deserialize_with = "lenient::object")]
    pub campus_commute: CampusCommute,
    #[serde(default, deserialize_with = "lenient::object")]
    pub faang_recruitment: FaangRecruitment,
    /// One entry per year, arbitrary order
    #[serde(default, deserialize_with = "lenient::list")]
    pub career_outcomes: Vec<CareerOutcome>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub famous_alumni: Vec<Alumnus>,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub application_link: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub short_note: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub princeton_review_status: PrincetonReviewStatus,
}

impl CollegeRecord {
    /// Bare record for a name; every other field unknown.
    pub fn named(college_name: &str) -> Self {
        Self {
            college_name: s!(college_name),
            ..Self::default()
        }
    }

    pub fn with_major(mut self, major: Option<&str>) -> Self {
        self.user_input_major = major.map(String::from);
        self
    }

    /// Parse one payload from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

impl Default for CollegeRecord {
    fn default() -> Self {
        Self {
            college_name: na(),
            location: na(),
            website: na(),
            general_phone: na(),
            school_type: na(),
            setting: na(),
            awards_offered: Vec::new(),
            campus_housing: false,
            student_population: na(),
            acceptance_rate: 0.0,
            four_year_graduation_rate: 0.0,
            admission_requirements: AdmissionRequirements::default(),
            cost_of_attendance: CostOfAttendance::default(),
            scholarships: Vec::new(),
            academic_tracks: Vec::new(),
            user_input_major: None,
            other_details: OtherDetails::default(),
            clubs: Vec::new(),
            counselor_info: CounselorInfo::default(),
            upcoming_visits: Vec::new(),
            student_opportunities: Vec::new(),
            nearby_places: Vec::new(),
            campus_commute: CampusCommute::default(),
            faang_recruitment: FaangRecruitment::default(),
            career_outcomes: Vec::new(),
            famous_alumni: Vec::new(),
            application_link: na(),
            short_note: na(),
            princeton_review_status: PrincetonReviewStatus::default(),
        }
    }
}

/* ---------------- Admissions ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionRequirements {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub avg_gpa: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub minimum_gpa: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub sat_range: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub act_range: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub test_policy: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub essay_required: bool,
    #[serde(default, deserialize_with = "lenient::list")]
    pub essay_prompts: Vec<EssayPrompt>,
}

impl Default for AdmissionRequirements {
    fn default() -> Self {
        Self {
            avg_gpa: na(),
            minimum_gpa: na(),
            sat_range: na(),
            act_range: na(),
            test_policy: na(),
            essay_required: false,
            essay_prompts: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EssayPrompt {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub text: String,
}

/* ---------------- Costs ---------------- */

/// Annual costs in dollars. 0 means "not available", never a real cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOfAttendance {
    #[serde(default, deserialize_with = "lenient::number")]
    pub in_state_tuition: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub out_of_state_tuition: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub international_tuition: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub room_and_board: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub books: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub food: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub travel_expenses: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scholarship {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub amount: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub duration: String,
    /// "Institutional", "Third-Party", ...
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: String,
}

/* ---------------- Academics & student life ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AcademicTrack {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub major: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherDetails {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub regular_decision_deadline: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub early_decision_deadline: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub early_action_deadline: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub student_faculty_ratio: String,
}

impl Default for OtherDetails {
    fn default() -> Self {
        Self {
            regular_decision_deadline: na(),
            early_decision_deadline: na(),
            early_action_deadline: na(),
            student_faculty_ratio: na(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    /// Blank groups under "General"
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CounselorInfo {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub email: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub phone: String,
}

impl Default for CounselorInfo {
    fn default() -> Self {
        Self { name: na(), email: na(), phone: na() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollegeVisit {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub date: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub link: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOpportunity {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub description: String,
    /// "On-Campus", "Off-Campus", "Remote"
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub application_timeline: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub link: String,
    /// Blank groups under "Other"
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub link: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub distance_from_college: String,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub free_transport_available: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusCommute {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub free_services: Vec<String>,
}

impl Default for CampusCommute {
    fn default() -> Self {
        Self { summary: na(), free_services: Vec::new() }
    }
}

/* ---------------- Careers ---------------- */

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaangRecruitment {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub has_presence: bool,
    #[serde(default, deserialize_with = "lenient::list")]
    pub known_companies: Vec<String>,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub recruitment_summary: String,
}

impl Default for FaangRecruitment {
    fn default() -> Self {
        Self {
            has_presence: false,
            known_companies: Vec::new(),
            recruitment_summary: na(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerOutcome {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub placement_rate: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub median_starting_salary: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub top_recruiters: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub local_recruiters: Vec<String>,
    /// Integer year as text, e.g. "2023"
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub year: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alumnus {
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub grad_year: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub current_title: String,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub achievement: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrincetonReviewStatus {
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_listed: bool,
    #[serde(default = "na", deserialize_with = "lenient::text")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::list")]
    pub pros: Vec<String>,
    #[serde(default, deserialize_with = "lenient::list")]
    pub cons: Vec<String>,
}

impl Default for PrincetonReviewStatus {
    fn default() -> Self {
        Self {
            is_listed: false,
            summary: na(),
            pros: Vec::new(),
            cons: Vec::new(),
        }
    }
}

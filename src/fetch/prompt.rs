// src/fetch/prompt.rs
//
// Request body pieces for the generative source: the instruction text and
// the JSON response schema the model is constrained to. Field names in the
// schema are the record's wire names.

use serde_json::{json, Value};

/// Instruction text for one (college, major) query.
pub fn build_prompt(college_name: &str, major: Option<&str>) -> String {
    let focus = match major.map(str::trim).filter(|m| !m.is_empty()) {
        Some(m) => format!("focus on majors, concentrations, and programs related to \"{m}\""),
        None => s!("focus on popular pre-med or health-science tracks"),
    };

    format!(
        "Act as an expert college admissions coach. For the university \"{college_name}\", provide \
comprehensive, detailed, and up-to-date information for high school students.
This includes:
- General information: official website, general phone number, all awards/degrees offered, total and undergraduate student population, campus housing availability.
- Admission requirements (GPA, test scores, essay prompts).
- Cost of attendance (tuition per residency tier, room & board, books, food, travel).
- Scholarships (institutional and third-party).
- Academic tracks ({focus}).
- Student life and clubs, categorized.
- Student opportunities (research, volunteering, career development).
- Nearby amenities with distance and free transport info, and campus commute options.
- Career outcomes for the most recent year and the two previous years: placement rate, median starting salary, top national recruiters, local recruiters, data year.
- FAANG / major tech recruitment history.
- Notable alumni.
- Application deadlines (Regular Decision, Early Action, Early Decision) and student:faculty ratio.
- Admissions counselor contact, upcoming college visits, official application portal URL.
- A very short introductory note, four-year graduation rate, school type and setting.
- Princeton Review status (summary, pros and cons if listed).

Ensure all data fits the provided JSON schema. Use \"N/A\" or empty arrays for unavailable or irrelevant data."
    )
}

/* ---------------- Schema ---------------- */

fn string(desc: &str) -> Value {
    json!({ "type": "STRING", "description": desc })
}

fn number(desc: &str) -> Value {
    json!({ "type": "NUMBER", "description": desc })
}

fn boolean(desc: &str) -> Value {
    json!({ "type": "BOOLEAN", "description": desc })
}

fn strings(desc: &str) -> Value {
    json!({ "type": "ARRAY", "items": { "type": "STRING" }, "description": desc })
}

fn array(items: Value, desc: &str) -> Value {
    json!({ "type": "ARRAY", "items": items, "description": desc })
}

/// Object with every listed property required.
fn object(props: &[(&str, Value)]) -> Value {
    let required: Vec<&str> = props.iter().map(|(k, _)| *k).collect();
    let properties: serde_json::Map<String, Value> =
        props.iter().map(|(k, v)| (s!(*k), v.clone())).collect();
    json!({ "type": "OBJECT", "properties": properties, "required": required })
}

/// Response schema for one college record.
pub fn response_schema() -> Value {
    object(&[
        ("collegeName", string("Official name of the college.")),
        ("location", string("City and state.")),
        ("website", string("Official website URL.")),
        ("generalPhone", string("General information phone number.")),
        ("schoolType", string("e.g. 'Private Nonprofit', 'Public'.")),
        ("setting", string("e.g. 'Urban', 'Suburban', 'Rural'.")),
        ("awardsOffered", strings("Degrees and certificates offered.")),
        ("campusHousing", boolean("On-campus housing is available.")),
        ("studentPopulation", string("Total with undergraduate count, e.g. '15,081 (6,818 undergraduate)'.")),
        ("acceptanceRate", number("Acceptance rate as a percentage, e.g. 15.")),
        ("fourYearGraduationRate", number("Four-year graduation rate as a percentage.")),
        ("admissionRequirements", object(&[
            ("avgGpa", string("Average GPA of admitted students.")),
            ("minimumGpa", string("Minimum GPA, if specified.")),
            ("satRange", string("25th-75th percentile SAT.")),
            ("actRange", string("25th-75th percentile ACT.")),
            ("testPolicy", string("e.g. 'Test Optional'.")),
            ("essayRequired", boolean("An essay is required.")),
            ("essayPrompts", array(object(&[
                ("title", string("Prompt title.")),
                ("text", string("Full prompt text.")),
            ]), "Essay prompts.")),
        ])),
        ("costOfAttendance", object(&[
            ("inStateTuition", number("Annual in-state tuition and fees.")),
            ("outOfStateTuition", number("Annual out-of-state tuition and fees.")),
            ("internationalTuition", number("Annual international tuition and fees.")),
            ("roomAndBoard", number("Annual room and board.")),
            ("books", number("Annual books and supplies.")),
            ("food", number("Annual food beyond the meal plan.")),
            ("travelExpenses", number("Annual travel.")),
        ])),
        ("scholarships", array(object(&[
            ("name", string("Scholarship name.")),
            ("amount", string("Amount or range.")),
            ("description", string("Eligibility and details.")),
            ("duration", string("e.g. '4 Years', 'Renewable'.")),
            ("type", string("'Institutional' or 'Third-Party'.")),
        ]), "Notable scholarships.")),
        ("academicTracks", array(object(&[
            ("major", string("Major or program.")),
            ("description", string("Strengths and resources.")),
        ]), "Tracks relevant to the student's interest.")),
        ("otherDetails", object(&[
            ("regularDecisionDeadline", string("Regular Decision deadline.")),
            ("earlyDecisionDeadline", string("Early Decision deadline or 'N/A'.")),
            ("earlyActionDeadline", string("Early Action deadline or 'N/A'.")),
            ("studentFacultyRatio", string("e.g. '8:1'.")),
        ])),
        ("clubs", array(object(&[
            ("name", string("Club name.")),
            ("category", string("e.g. 'Sports', 'Arts', 'Academic'.")),
        ]), "Popular clubs.")),
        ("counselorInfo", object(&[
            ("name", string("Contact name or 'Admissions Office'.")),
            ("email", string("Admissions email.")),
            ("phone", string("Admissions phone.")),
        ])),
        ("upcomingVisits", array(object(&[
            ("date", string("Date and time.")),
            ("description", string("Event description.")),
            ("link", string("Registration URL.")),
        ]), "Upcoming visits and events.")),
        ("studentOpportunities", array(object(&[
            ("name", string("Opportunity name.")),
            ("description", string("Short description.")),
            ("location", string("'On-Campus', 'Off-Campus' or 'Remote'.")),
            ("applicationTimeline", string("When to apply.")),
            ("link", string("More information URL.")),
            ("type", string("e.g. 'Research', 'Volunteering'.")),
        ]), "Research, volunteering and career opportunities.")),
        ("nearbyPlaces", array(object(&[
            ("name", string("Place name.")),
            ("category", string("e.g. 'Restaurant', 'Cinema'.")),
            ("description", string("Short description.")),
            ("link", string("Website or maps link.")),
            ("distanceFromCollege", string("e.g. '0.5 miles'.")),
            ("freeTransportAvailable", boolean("Free college transport reaches it.")),
        ]), "Nearby places.")),
        ("campusCommute", object(&[
            ("summary", string("Transportation overview.")),
            ("freeServices", strings("Free transport services.")),
        ])),
        ("careerOutcomes", array(object(&[
            ("placementRate", string("e.g. '92%'.")),
            ("medianStartingSalary", string("Median starting salary.")),
            ("topRecruiters", strings("National recruiters that year.")),
            ("localRecruiters", strings("Local recruiters that year.")),
            ("year", string("Data year, e.g. '2023'.")),
        ]), "Outcomes for the last 3 years, most recent first.")),
        ("faangRecruitment", object(&[
            ("hasPresence", boolean("Known big tech recruitment on campus.")),
            ("knownCompanies", strings("Companies known to recruit.")),
            ("recruitmentSummary", string("Recruitment history summary.")),
        ])),
        ("famousAlumni", array(object(&[
            ("name", string("Alumnus name.")),
            ("gradYear", string("Graduation year or 'N/A'.")),
            ("currentTitle", string("Most notable title.")),
            ("achievement", string("Short achievement.")),
        ]), "Notable alumni.")),
        ("applicationLink", string("Official application portal URL.")),
        ("shortNote", string("Two-line introductory note.")),
        ("princetonReviewStatus", object(&[
            ("isListed", boolean("Listed in the Princeton Review best colleges.")),
            ("summary", string("Summary or 'N/A'.")),
            ("pros", strings("Advantages.")),
            ("cons", strings("Disadvantages.")),
        ])),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_mentions_college_and_major() {
        let p = build_prompt("Amherst College", Some("Biology"));
        assert!(p.contains("\"Amherst College\""));
        assert!(p.contains("\"Biology\""));
        assert!(build_prompt("X", None).contains("pre-med"));
    }

    #[test]
    fn schema_requires_every_top_level_field() {
        let schema = response_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 28);
        assert_eq!(schema["properties"]["scholarships"]["items"]["properties"]["type"]["type"], "STRING");
    }
}

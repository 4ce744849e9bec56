// src/heuristics/premed.rs
//
// Pre-med inference over academic tracks. A plain substring scan, not an
// understanding of the curriculum; results are approximate.

use crate::config::consts::NA;
use crate::record::{AcademicTrack, CollegeRecord};

const TRACK_TERMS: [&str; 3] = ["pre-med", "pre-medical", "health science"];

pub const NO_TRACK: &str = "No specific track found";
pub const NO_TRACK_PREP: &str = "General science curriculum provides foundation.";
pub const GENERIC_PREP: &str = "Offers advising and resources for MCAT preparation.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreMedInfo {
    pub track: String,
    pub mcat_prep: String,
}

/// Swappable pre-med scan used by the comparison engine.
pub trait PreMedStrategy {
    fn pre_med_info(&self, record: &CollegeRecord) -> PreMedInfo;
}

/// Default strategy: keyword scan of track majors and descriptions.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackScan;

impl PreMedStrategy for TrackScan {
    fn pre_med_info(&self, record: &CollegeRecord) -> PreMedInfo {
        pre_med_info(record)
    }
}

fn is_pre_med(track: &AcademicTrack) -> bool {
    let major = track.major.to_lowercase();
    let desc = track.description.to_lowercase();
    TRACK_TERMS.iter().any(|t| major.contains(t) || desc.contains(t))
}

/// First ". "-separated sentence mentioning the MCAT, trimmed, with "." appended.
fn mcat_sentence(description: &str) -> Option<String> {
    let sentence = description
        .split(". ")
        .find(|s| s.to_lowercase().contains("mcat"))?;
    Some(join!(sentence.trim(), "."))
}

pub fn pre_med_info(record: &CollegeRecord) -> PreMedInfo {
    let tracks = &record.academic_tracks;
    if tracks.is_empty() {
        return PreMedInfo { track: s!(NA), mcat_prep: s!(NA) };
    }

    let matched: Vec<&AcademicTrack> = tracks.iter().filter(|t| is_pre_med(t)).collect();
    if matched.is_empty() {
        return PreMedInfo { track: s!(NO_TRACK), mcat_prep: s!(NO_TRACK_PREP) };
    }

    let track = matched.iter().map(|t| t.major.as_str()).collect::<Vec<_>>().join(", ");
    let mcat_prep = matched
        .iter()
        .find_map(|t| mcat_sentence(&t.description))
        .unwrap_or_else(|| s!(GENERIC_PREP));

    PreMedInfo { track, mcat_prep }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_tracks(tracks: &[(&str, &str)]) -> CollegeRecord {
        let mut rec = CollegeRecord::named("Test U");
        rec.academic_tracks = tracks
            .iter()
            .map(|(m, d)| AcademicTrack { major: s!(*m), description: s!(*d) })
            .collect();
        rec
    }

    #[test]
    fn no_tracks_is_unknown() {
        let info = pre_med_info(&with_tracks(&[]));
        assert_eq!(info, PreMedInfo { track: s!("N/A"), mcat_prep: s!("N/A") });
    }

    #[test]
    fn unmatched_tracks_get_fallback() {
        let info = pre_med_info(&with_tracks(&[("History", "Archives and such.")]));
        assert_eq!(info.track, NO_TRACK);
        assert_eq!(info.mcat_prep, NO_TRACK_PREP);
    }

    #[test]
    fn matched_tracks_pull_mcat_sentence() {
        let info = pre_med_info(&with_tracks(&[
            ("Biology (Pre-Med)", "Strong lab work. Dedicated MCAT review each spring. Small classes."),
            ("Health Sciences", "Clinical exposure."),
            ("Art", "Painting."),
        ]));
        assert_eq!(info.track, "Biology (Pre-Med), Health Sciences");
        assert_eq!(info.mcat_prep, "Dedicated MCAT review each spring.");
    }

    #[test]
    fn matched_without_mcat_mention() {
        let info = pre_med_info(&with_tracks(&[("Chemistry", "A pre-medical pathway.")]));
        assert_eq!(info.track, "Chemistry");
        assert_eq!(info.mcat_prep, GENERIC_PREP);
    }

    #[test]
    fn period_appended_even_after_final_sentence() {
        let info = pre_med_info(&with_tracks(&[("Pre-Med", "Small cohorts. Includes MCAT prep.")]));
        assert_eq!(info.mcat_prep, "Includes MCAT prep..");
        let info = pre_med_info(&with_tracks(&[("Pre-Med", "  MCAT boot camp  ")]));
        assert_eq!(info.mcat_prep, "MCAT boot camp.");
    }
}

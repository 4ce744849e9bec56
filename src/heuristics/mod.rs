//! # Text heuristics
//!
//! Best-effort scans over free text produced by the generative source.
//! None of these understand language; they match fixed vocabularies and
//! patterns, and their results are hints for display, not facts.
//!
//! - `keywords` – whole-word, case-insensitive highlighting of admissions terms.
//! - `deadline` – first "deadline / due by / apply by" date in a description.
//! - `premed`   – pre-med track and MCAT-prep inference from academic tracks,
//!   behind the `PreMedStrategy` trait so callers can swap the scan.
//!
//! Nothing here feeds identity, dedup or persistence.
pub mod keywords;
pub mod deadline;
pub mod premed;

pub use keywords::{highlight_keywords, Highlighter, Span, DEFAULT_KEYWORDS};
pub use deadline::extract_deadline;
pub use premed::{pre_med_info, PreMedInfo, PreMedStrategy, TrackScan};

// src/fetch/mod.rs
//
// Record sources. The app only sees `CollegeSource`; the generative HTTP
// client is one implementation and tests plug in canned ones.

pub mod gemini;
pub mod prompt;

use thiserror::Error;

use crate::derive::is_unknown;
use crate::record::CollegeRecord;

pub use gemini::GeminiSource;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("no API key configured (set COLLEGE_SCOUT_API_KEY or API_KEY)")]
    MissingApiKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("source answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("received an empty response from the source")]
    EmptyResponse,

    #[error("response is not a college record: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Produces one record for a (college, major) query.
pub trait CollegeSource {
    fn fetch_college_info(&self, college_name: &str, major: Option<&str>) -> Result<CollegeRecord, FetchError>;
}

/// Drop a surrounding ```json fence, if any.
pub fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else { return t };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Decode the model's JSON text into a record and attach the caller's major
/// (a blank major is attached as absent).
/// Blank text, non-objects and payloads without a college name are empty.
pub fn decode_response_text(text: &str, major: Option<&str>) -> Result<CollegeRecord, FetchError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(FetchError::EmptyResponse);
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(FetchError::EmptyResponse);
    }

    let record: CollegeRecord = serde_json::from_value(value)?;
    if is_unknown(&record.college_name) {
        return Err(FetchError::EmptyResponse);
    }
    Ok(record.with_major(major.filter(|m| !m.trim().is_empty())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fences_are_stripped() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {}  "), "{}");
    }

    #[test]
    fn empty_payloads_are_rejected() {
        assert!(matches!(decode_response_text("   ", None), Err(FetchError::EmptyResponse)));
        assert!(matches!(decode_response_text("null", None), Err(FetchError::EmptyResponse)));
        assert!(matches!(decode_response_text("[]", None), Err(FetchError::EmptyResponse)));
        assert!(matches!(decode_response_text("{}", None), Err(FetchError::EmptyResponse)));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(decode_response_text("not json", None), Err(FetchError::Decode(_))));
    }

    #[test]
    fn major_is_attached() {
        let rec = decode_response_text(r#"{"collegeName":"Amherst College"}"#, Some("Biology")).unwrap();
        assert_eq!(rec.user_input_major.as_deref(), Some("Biology"));
        let rec = decode_response_text(r#"{"collegeName":"Amherst College","userInputMajor":"Stale"}"#, None).unwrap();
        assert_eq!(rec.user_input_major, None);
        let rec = decode_response_text(r#"{"collegeName":"Amherst College"}"#, Some("  ")).unwrap();
        assert_eq!(rec.user_input_major, None);
    }
}

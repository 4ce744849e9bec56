// src/fetch/gemini.rs
//
// Generative source over the Gemini REST API (blocking). One POST to
// `{base}/v1beta/models/{model}:generateContent` with the prompt and a JSON
// response schema; the first candidate's text parts are the record JSON.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::{json, Value};

use super::prompt::{build_prompt, response_schema};
use super::{decode_response_text, CollegeSource, FetchError};
use crate::config::options::SourceOptions;
use crate::record::CollegeRecord;

#[derive(Debug)]
pub struct GeminiSource {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiSource {
    pub fn new(opts: &SourceOptions) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(opts.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: s!(opts.base_url.trim_end_matches('/')),
            model: opts.model.clone(),
            api_key: opts.resolve_api_key(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    fn request_body(college_name: &str, major: Option<&str>) -> Value {
        json!({
            "contents": [{ "role": "user", "parts": [{ "text": build_prompt(college_name, major) }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema(),
            },
        })
    }
}

/// Concatenated text parts of the first candidate; empty when there is none.
pub fn candidate_text(body: &Value) -> String {
    let Some(parts) = body["candidates"][0]["content"]["parts"].as_array() else {
        return s!();
    };
    parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .concat()
}

impl CollegeSource for GeminiSource {
    fn fetch_college_info(&self, college_name: &str, major: Option<&str>) -> Result<CollegeRecord, FetchError> {
        let key = self.api_key.as_deref().ok_or(FetchError::MissingApiKey)?;

        logd!("Gemini: POST {} for {:?} (major {:?})", self.endpoint(), college_name, major);
        let resp = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", key)
            .json(&Self::request_body(college_name, major))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            logw!("Gemini: {} for {:?}", status, college_name);
            return Err(FetchError::Status { status: status.as_u16(), body });
        }

        let body: Value = resp.json()?;
        let text = candidate_text(&body);
        logd!("Gemini: {} bytes of record JSON", text.len());
        decode_response_text(&text, major)
    }
}

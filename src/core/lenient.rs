// src/core/lenient.rs
//
// Tolerant field decoders for payloads we do not control.
//
// Generated JSON drifts: numbers arrive as "45,000", arrays arrive as null or
// as a bare string, whole sub-objects go missing. Every decoder here accepts
// any JSON value and falls back to the field's "unknown" value instead of
// failing the record:
//   text   -> "N/A"
//   number -> 0
//   flag   -> false
//   list   -> [] (and malformed elements are dropped)
//   object -> T::default()

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::consts::NA;

/// Default for text fields.
pub fn na() -> String {
    s!(NA)
}

pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => na(),
    })
}

pub fn optional_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_loose_number(&s),
        _ => 0.0,
    })
}

pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "yes"),
        _ => false,
    })
}

pub fn list<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

pub fn object<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(d)? {
        v @ Value::Object(_) => serde_json::from_value(v).unwrap_or_default(),
        _ => T::default(),
    })
}

/// "$45,000" -> 45000, "12.5%" -> 12.5, anything else -> 0.
fn parse_loose_number(s: &str) -> f64 {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | '%' | ' '))
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default = "na", deserialize_with = "text")]
        name: String,
        #[serde(default, deserialize_with = "number")]
        cost: f64,
        #[serde(default, deserialize_with = "flag")]
        housing: bool,
        #[serde(default, deserialize_with = "list")]
        tags: Vec<String>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_fields_take_unknown_values() {
        let p = probe("{}");
        assert_eq!(p.name, "N/A");
        assert_eq!(p.cost, 0.0);
        assert!(!p.housing);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn wrong_types_degrade_instead_of_failing() {
        let p = probe(r#"{"name": null, "cost": "$45,000", "housing": "Yes", "tags": "Sports"}"#);
        assert_eq!(p.name, "N/A");
        assert_eq!(p.cost, 45000.0);
        assert!(p.housing);
        assert!(p.tags.is_empty());
    }

    #[test]
    fn malformed_list_items_are_dropped() {
        let p = probe(r#"{"tags": ["a", 3, null, "b"]}"#);
        assert_eq!(p.tags, vec!["a", "b"]);
    }

    #[test]
    fn loose_numbers() {
        assert_eq!(parse_loose_number("12.5%"), 12.5);
        assert_eq!(parse_loose_number("unknown"), 0.0);
        assert_eq!(parse_loose_number(""), 0.0);
    }
}

// src/core/sanitize.rs

/// Collapse every whitespace run into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lowercase and replace each whitespace run with one `_`.
/// Leading/trailing runs are kept as `_` too: "  A B" -> "_a_b".
pub fn underscore_ws_lower(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_ws = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_ws { out.push('_'); in_ws = true; }
        } else {
            out.extend(ch.to_lowercase());
            in_ws = false;
        }
    }
    out
}

/// Newlines inside a cell become spaces (export flattening).
pub fn flatten_newlines(s: &str) -> String {
    s.replace('\n', " ")
}

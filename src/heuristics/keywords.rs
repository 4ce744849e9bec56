// src/heuristics/keywords.rs
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

/// Admissions terms worth emphasizing in scholarship descriptions.
pub const DEFAULT_KEYWORDS: [&str; 16] = [
    "gpa", "major", "merit-based", "need-based", "financial need", "essay",
    "recommendation", "first-year", "freshman", "transfer", "international",
    "resident", "citizen", "leadership", "community service", "deadline",
];

static DEFAULT: LazyLock<Highlighter> = LazyLock::new(|| {
    Highlighter::new(&DEFAULT_KEYWORDS).unwrap_or_else(|e| {
        loge!("Keywords: default vocabulary rejected: {e}");
        Highlighter { re: None }
    })
});

/// A piece of highlighted text. Concatenating all spans gives back the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Span<'a> {
    Plain(&'a str),
    Keyword(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Span::Plain(s) | Span::Keyword(s) => s,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Highlighter {
    // None when the vocabulary is empty
    re: Option<Regex>,
}

impl Highlighter {
    /// Whole-word, case-insensitive alternation over `keywords`.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, regex::Error> {
        let alts: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().trim())
            .filter(|k| !k.is_empty())
            .map(regex::escape)
            .collect();
        if alts.is_empty() {
            return Ok(Self { re: None });
        }
        let pattern = format!(r"\b(?:{})\b", alts.join("|"));
        let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
        Ok(Self { re: Some(re) })
    }

    /// Shared instance over `DEFAULT_KEYWORDS`.
    pub fn default_vocabulary() -> &'static Highlighter {
        &DEFAULT
    }

    pub fn highlight<'t>(&self, text: &'t str) -> Vec<Span<'t>> {
        let Some(re) = &self.re else {
            return if text.is_empty() { Vec::new() } else { vec![Span::Plain(text)] };
        };

        let mut spans = Vec::new();
        let mut last = 0usize;
        for m in re.find_iter(text) {
            if m.start() > last {
                spans.push(Span::Plain(&text[last..m.start()]));
            }
            spans.push(Span::Keyword(m.as_str()));
            last = m.end();
        }
        if last < text.len() {
            spans.push(Span::Plain(&text[last..]));
        }
        spans
    }

    /// Markdown-ish rendering: keywords wrapped in `**`.
    pub fn mark(&self, text: &str) -> String {
        render_marked(&self.highlight(text))
    }
}

/// Highlight with an ad hoc vocabulary. An unusable vocabulary highlights nothing.
pub fn highlight_keywords<'t, S: AsRef<str>>(text: &'t str, keywords: &[S]) -> Vec<Span<'t>> {
    match Highlighter::new(keywords) {
        Ok(h) => h.highlight(text),
        Err(e) => {
            loge!("Keywords: vocabulary rejected: {e}");
            vec![Span::Plain(text)]
        }
    }
}

pub fn render_marked(spans: &[Span<'_>]) -> String {
    let mut out = String::new();
    for span in spans {
        match span {
            Span::Plain(s) => out.push_str(s),
            Span::Keyword(s) => {
                out.push_str("**");
                out.push_str(s);
                out.push_str("**");
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_case_insensitive_whole_word() {
        let spans = highlight_keywords("GPA requirement", &["gpa"]);
        assert_eq!(spans, vec![Span::Keyword("GPA"), Span::Plain(" requirement")]);
    }

    #[test]
    fn no_partial_word_matches() {
        let spans = highlight_keywords("gpax", &["gpa"]);
        assert_eq!(spans, vec![Span::Plain("gpax")]);
    }

    #[test]
    fn multi_word_and_hyphenated_terms() {
        let h = Highlighter::default_vocabulary();
        let out = h.mark("Merit-based award for Financial Need and community service.");
        assert_eq!(out, "**Merit-based** award for **Financial Need** and **community service**.");
    }

    #[test]
    fn spans_rebuild_the_input() {
        let text = "Essay due; see the deadline. International students welcome";
        let joined: String = Highlighter::default_vocabulary()
            .highlight(text)
            .iter()
            .map(|s| s.text())
            .collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn empty_vocabulary_passes_through() {
        let empty: [&str; 0] = [];
        assert_eq!(highlight_keywords("anything", &empty), vec![Span::Plain("anything")]);
    }
}

//! Markup stripping and whitespace cleanup for fetched passages.
//!
//! This is a regex heuristic, not an HTML parser: anything that looks like
//! `<...>` is removed. Malformed or nested markup can be over- or
//! under-stripped. Callers only see `normalize(raw, options)`.

use regex::Regex;
use std::sync::OnceLock;

/// How runs of whitespace are cleaned up after tag stripping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespacePolicy {
    /// Three or more consecutive newlines become exactly two.
    ParagraphBreaks,
    /// Three or more consecutive whitespace characters become one space.
    CollapseRuns,
}

/// Normalization settings for one passage source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub whitespace: WhitespacePolicy,
    /// Hard character cut applied last. `None` keeps everything.
    pub max_chars: Option<usize>,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            whitespace: WhitespacePolicy::ParagraphBreaks,
            max_chars: None,
        }
    }
}

fn line_break_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br\s*/?>").expect("valid regex"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("valid regex"))
}

fn newline_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"))
}

fn whitespace_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{3,}").expect("valid regex"))
}

/// Turn raw, possibly markup-laden passage text into plain prose.
///
/// Never fails; the result may be empty.
pub fn normalize(raw: &str, options: &NormalizeOptions) -> String {
    let text = line_break_re().replace_all(raw, "\n");
    let text = tag_re().replace_all(&text, "");
    let text = match options.whitespace {
        WhitespacePolicy::ParagraphBreaks => newline_run_re().replace_all(&text, "\n\n"),
        WhitespacePolicy::CollapseRuns => whitespace_run_re().replace_all(&text, " "),
    };
    let text = text.trim();

    match options.max_chars {
        Some(max) => truncate_chars(text, max).to_string(),
        None => text.to_string(),
    }
}

/// Cut `text` to at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

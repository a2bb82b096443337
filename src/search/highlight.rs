//! Match highlighting with sentinel markers.
//!
//! The aggregator never emits inline HTML. Matched substrings are wrapped in
//! a `[[HIGHLIGHT]]`/`[[/HIGHLIGHT]]` marker pair and the presentation layer
//! applies actual styling at render time. Source values that already carry
//! markup (previously rendered HTML, or leftover markers) are stripped back
//! to plain text before markers are applied, so a field is never
//! double-wrapped.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::search::error::{SearchError, SearchResult};

/// Opening sentinel marker
pub const HIGHLIGHT_OPEN: &str = "[[HIGHLIGHT]]";

/// Closing sentinel marker
pub const HIGHLIGHT_CLOSE: &str = "[[/HIGHLIGHT]]";

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("HTML tag pattern is valid"));

/// Compile the highlight pattern for a query.
///
/// The query is matched as a whole literal, case-insensitively, with
/// regex-special characters escaped and internal whitespace runs treated as
/// flexible `\s+`.
pub fn build_pattern(query: &str) -> SearchResult<Regex> {
    let escaped: Vec<String> = query.split_whitespace().map(regex::escape).collect();

    RegexBuilder::new(&escaped.join(r"\s+"))
        .case_insensitive(true)
        .build()
        .map_err(|e| SearchError::QueryPattern(e.to_string()))
}

/// Strip HTML tags and any existing highlight markers, recovering plain text.
pub fn strip_markup(value: &str) -> String {
    let without_markers = value.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "");
    HTML_TAG.replace_all(&without_markers, "").into_owned()
}

/// Remove highlight markers only, leaving the rest of the text untouched.
pub fn strip_highlight(value: &str) -> String {
    value.replace(HIGHLIGHT_OPEN, "").replace(HIGHLIGHT_CLOSE, "")
}

/// Wrap every match of `pattern` in `value` with sentinel markers.
///
/// The value is reduced to plain text first; stripping the markers from the
/// output reproduces that plain text exactly.
pub fn highlight(value: &str, pattern: &Regex) -> String {
    let plain = strip_markup(value);
    pattern
        .replace_all(&plain, format!("{HIGHLIGHT_OPEN}${{0}}{HIGHLIGHT_CLOSE}"))
        .into_owned()
}

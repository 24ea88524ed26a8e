//! Text normalization applied to every extracted document

use crate::processing::document::NormalizedText;
use regex::Regex;
use std::sync::LazyLock;

// Whitespace, control characters, DEL and anything outside ASCII.
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\x21-\x7E]+").expect("Invalid separator regex"));

/// Collapse whitespace and non-ASCII runs into single spaces, trim, lowercase.
pub fn normalize_text(raw: &str) -> NormalizedText {
    let collapsed = SEPARATOR_RUN.replace_all(raw, " ");
    NormalizedText::new_unchecked(collapsed.trim().to_ascii_lowercase())
}

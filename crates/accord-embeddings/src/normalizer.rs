//! Markup and whitespace cleanup applied before embedding.

use std::sync::LazyLock;

use accord_core::config::defaults::DEFAULT_MAX_TEXT_CHARS;
use regex::Regex;

/// Runs of markdown emphasis and heading markers.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[*_#]+").unwrap());

/// Any run of whitespace.
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Deterministic text cleaner.
///
/// Strips `*`, `_` and `#` runs, collapses whitespace to single spaces, caps the
/// text at `max_chars` characters and trims both ends. The cap is lossy and silent.
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer {
    max_chars: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_CHARS)
    }
}

impl TextNormalizer {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn normalize(&self, text: &str) -> String {
        let stripped = MARKUP_RE.replace_all(text, "");
        let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
        truncate_chars(&collapsed, self.max_chars).trim().to_string()
    }
}

/// Normalize with the default character cap.
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

/// Longest prefix of `text` holding at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

//! Final text assembly: join, normalize, truncate.

use crate::patterns::WHITESPACE_NORMALIZE;

/// Collapse every whitespace run to a single space and trim both ends.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Cut `text` to at most `max_chars` characters.
///
/// Returns `true` when something was cut. The cut never splits a code point
/// and ignores word boundaries.
pub fn truncate_chars(text: &mut String, max_chars: usize) -> bool {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => {
            text.truncate(byte_idx);
            true
        }
        None => false,
    }
}

/// Join retained blocks into the final text.
///
/// Returns the text and whether it was truncated.
#[must_use]
pub fn finalize(blocks: &[String], max_length: usize) -> (String, bool) {
    let mut text = normalize_whitespace(&blocks.join(" "));
    let truncated = truncate_chars(&mut text, max_length);
    (text, truncated)
}

//! Result types for extraction output.

use serde::Serialize;

pub use crate::extractor::ExtractStats;

/// Result of article extraction from an HTML document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractResult {
    /// Article text: retained blocks joined by single spaces, whitespace
    /// collapsed, capped at `Options::max_length` characters.
    pub text: String,

    /// Retained blocks in document order, before normalization and
    /// truncation.
    pub blocks: Vec<String>,

    /// Whether `text` was cut to fit `Options::max_length`.
    pub truncated: bool,

    /// Counters from the scan.
    pub stats: ExtractStats,

    /// Non-fatal notes about the document, such as:
    /// - Trailing text dropped for lack of a closing block tag
    /// - Boilerplate regions still open at the end of the document
    /// - Output truncated
    pub warnings: Vec<String>,
}

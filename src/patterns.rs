//! Compiled regex patterns for region classification and text cleanup.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Boilerplate Detection Patterns
// =============================================================================

/// Substrings that mark a `div`/`section`/`aside` class or id as page
/// furniture rather than article content.
///
/// Matching is plain substring containment, so `ad-` catches `ad-slot` and
/// `nav` catches `main-navigation` and `canvas` alike.
pub const BOILERPLATE_KEYWORDS: [&str; 13] = [
    "nav",
    "menu",
    "sidebar",
    "header",
    "footer",
    "advertisement",
    "ad-",
    "banner",
    "popup",
    "social",
    "share",
    "comment",
    "related",
];

/// Case-insensitive alternation over [`BOILERPLATE_KEYWORDS`].
pub static BOILERPLATE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BOILERPLATE_KEYWORDS
        .iter()
        .map(|kw| regex::escape(kw))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){alternation}")).expect("BOILERPLATE_ATTR regex")
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches multiple whitespace characters for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

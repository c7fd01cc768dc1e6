//! Tag constants and catalogs used while scanning.
//!
//! Tags that open a suppressed region are modelled by `state::Region`.
//!
//! Each list is provided both as an array (for iteration) and as a `HashSet`
//! (for O(1) lookup). Tag names are compared in lowercase, which is how the
//! tokenizer reports them.

use std::collections::HashSet;
use std::sync::LazyLock;

// === Tag Lists (arrays for iteration) ===

/// Tags whose closing ends a paragraph-like block: p, div, section, article,
/// h1-h6, li
pub static BLOCK_BOUNDARY_TAGS: [&str; 11] = [
    "p", "div", "section", "article", "h1", "h2", "h3", "h4", "h5", "h6", "li",
];

/// Containers whose class/id attributes are checked for boilerplate
/// keywords: div, section, aside
pub static HEURISTIC_CONTAINER_TAGS: [&str; 3] = ["div", "section", "aside"];

/// Attributes inspected by the class/id heuristic
pub static HEURISTIC_ATTRS: [&str; 2] = ["class", "id"];

/// Tags whose content the tokenizer reads as raw text rather than markup.
/// `script` is read with script-data rules, the others as plain raw text.
pub static RAW_TEXT_TAGS: [&str; 4] = ["script", "style", "iframe", "noscript"];

// === Tag Sets (HashSets for O(1) lookup) ===

/// `BLOCK_BOUNDARY_TAGS` as a `HashSet`
pub static BLOCK_BOUNDARY_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    BLOCK_BOUNDARY_TAGS.into_iter().collect()
});

/// `HEURISTIC_CONTAINER_TAGS` as a `HashSet`
pub static HEURISTIC_CONTAINER_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HEURISTIC_CONTAINER_TAGS.into_iter().collect()
});

/// `RAW_TEXT_TAGS` as a `HashSet`
pub static RAW_TEXT_TAG_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    RAW_TEXT_TAGS.into_iter().collect()
});

// === Helper Functions ===

/// Check if closing the tag flushes the current block
#[inline]
#[must_use]
pub fn is_block_boundary(tag: &str) -> bool {
    BLOCK_BOUNDARY_TAG_SET.contains(tag)
}

/// Check if the tag's class/id attributes are subject to the keyword heuristic
#[inline]
#[must_use]
pub fn is_heuristic_container(tag: &str) -> bool {
    HEURISTIC_CONTAINER_TAG_SET.contains(tag)
}

/// Check if the attribute takes part in the keyword heuristic
#[inline]
#[must_use]
pub fn is_heuristic_attr(attr: &str) -> bool {
    HEURISTIC_ATTRS.contains(&attr)
}

/// Check if the tag's content must be tokenized as raw text
#[inline]
#[must_use]
pub fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_TAG_SET.contains(tag)
}

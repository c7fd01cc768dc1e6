//! Streaming region classifier.
//!
//! The scanner receives tag-open, tag-close, and text events in document
//! order, keeps the suppression flags current, and forwards text from
//! content regions to the block assembler.

use serde::Serialize;

use super::blocks::{BlockAssembler, Flush};
use super::state::{Region, SuppressionState};
use super::tags;
use crate::options::Options;
use crate::patterns::BOILERPLATE_ATTR;

/// Counters collected while scanning one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Text runs delivered by the tokenizer.
    pub text_runs: usize,
    /// Text runs discarded because they were inside a boilerplate region.
    pub suppressed_runs: usize,
    /// Blocks kept for output.
    pub blocks_retained: usize,
    /// Blocks discarded for being too short.
    pub blocks_dropped: usize,
}

/// Everything a finished scan hands to the finalizer.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Retained blocks in document order.
    pub blocks: Vec<String>,
    /// Scan counters.
    pub stats: ExtractStats,
    /// Whether accepted text was still waiting for a block boundary at the
    /// end of the document (that text is dropped).
    pub trailing_text_dropped: bool,
    /// Regions that never closed.
    pub open_regions: Vec<String>,
}

/// Classifies document regions and collects content text.
#[derive(Debug, Clone)]
pub struct Scanner {
    state: SuppressionState,
    assembler: BlockAssembler,
    min_fragment_len: usize,
    stats: ExtractStats,
}

impl Scanner {
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            state: SuppressionState::new(options.scoped_regions),
            assembler: BlockAssembler::new(options.min_block_len),
            min_fragment_len: options.min_fragment_len,
            stats: ExtractStats::default(),
        }
    }

    /// Handle an opening tag. `attrs` yields `(name, value)` pairs.
    pub fn start_tag<'a, I>(&mut self, name: &str, attrs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        if let Some(region) = Region::from_tag(name) {
            self.state.enter(region);
        }

        if tags::is_heuristic_container(name) {
            let matched = attrs
                .into_iter()
                .any(|(attr, value)| tags::is_heuristic_attr(attr) && BOILERPLATE_ATTR.is_match(value));
            self.state.open_container(name, matched);
        }
    }

    /// Handle a closing tag.
    pub fn end_tag(&mut self, name: &str) {
        if let Some(region) = Region::from_tag(name) {
            self.state.exit(region);
        }

        if tags::is_heuristic_container(name) {
            self.state.close_container(name);
        }

        if tags::is_block_boundary(name) {
            match self.assembler.flush() {
                Flush::Retained => self.stats.blocks_retained += 1,
                Flush::Dropped => self.stats.blocks_dropped += 1,
                Flush::Empty => {}
            }
        }
    }

    /// Handle a run of character data between two markup tokens.
    pub fn text(&mut self, data: &str) {
        self.stats.text_runs += 1;
        if self.state.is_suppressed() {
            self.stats.suppressed_runs += 1;
            return;
        }

        let trimmed = data.trim();
        if trimmed.chars().count() > self.min_fragment_len {
            self.assembler.push_fragment(trimmed);
        }
    }

    /// Whether text would currently be discarded.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.state.is_suppressed()
    }

    /// End the scan and hand over the retained blocks.
    #[must_use]
    pub fn finish(self) -> ScanOutput {
        let trailing_text_dropped = self.assembler.has_pending();
        ScanOutput {
            open_regions: self.state.open_regions(),
            stats: self.stats,
            trailing_text_dropped,
            blocks: self.assembler.into_blocks(),
        }
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&Options::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG: &str = "A paragraph of article prose that is long enough to keep.";

    fn scanner() -> Scanner {
        Scanner::new(&Options::default())
    }

    fn no_attrs() -> std::iter::Empty<(&'static str, &'static str)> {
        std::iter::empty()
    }

    #[test]
    fn test_text_in_paragraph_is_retained() {
        let mut s = scanner();
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");

        let out = s.finish();
        assert_eq!(out.blocks, vec![LONG]);
        assert_eq!(out.stats.blocks_retained, 1);
        assert!(!out.trailing_text_dropped);
    }

    #[test]
    fn test_single_character_fragments_are_skipped() {
        let mut s = scanner();
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.text("  |  ");
        s.text("and a second sentence to follow it");
        s.end_tag("p");

        let out = s.finish();
        assert_eq!(
            out.blocks,
            vec![format!("{LONG} and a second sentence to follow it")]
        );
    }

    #[test]
    fn test_suppressed_tags_discard_text() {
        for tag in Region::ALL.map(Region::tag_name) {
            let mut s = scanner();
            s.start_tag(tag, no_attrs());
            s.text(LONG);
            s.end_tag(tag);
            s.end_tag("p");

            let out = s.finish();
            assert!(out.blocks.is_empty(), "{tag} leaked text");
            assert_eq!(out.stats.suppressed_runs, 1);
        }
    }

    #[test]
    fn test_keyword_class_on_div_suppresses_paragraphs() {
        let mut s = scanner();
        s.start_tag("div", [("class", "sidebar")]);
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");

        assert!(s.finish().blocks.is_empty());
    }

    #[test]
    fn test_keyword_id_is_checked() {
        let mut s = scanner();
        s.start_tag("section", [("class", "main"), ("id", "Related-Posts")]);
        assert!(s.is_suppressed());
    }

    #[test]
    fn test_keyword_in_other_attributes_is_ignored() {
        let mut s = scanner();
        s.start_tag("div", [("role", "navigation"), ("data-kind", "sidebar")]);
        assert!(!s.is_suppressed());
    }

    #[test]
    fn test_keyword_on_non_container_is_ignored() {
        let mut s = scanner();
        s.start_tag("article", [("class", "comment")]);
        s.start_tag("span", [("class", "share")]);
        assert!(!s.is_suppressed());
    }

    #[test]
    fn test_heuristic_region_outlives_its_div() {
        let mut s = scanner();
        s.start_tag("div", [("class", "menu")]);
        s.end_tag("div");
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");
        assert!(s.is_suppressed());

        // only a closing nav ends it
        s.end_tag("nav");
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");

        let out = s.finish();
        assert_eq!(out.blocks, vec![LONG]);
    }

    #[test]
    fn test_heuristic_region_not_cleared_by_header_or_footer() {
        let mut s = scanner();
        s.start_tag("aside", [("class", "banner")]);
        s.end_tag("header");
        s.end_tag("footer");
        assert!(s.is_suppressed());
    }

    #[test]
    fn test_scoped_mode_ends_region_at_container_close() {
        let options = Options {
            scoped_regions: true,
            ..Options::default()
        };
        let mut s = Scanner::new(&options);
        s.start_tag("div", [("class", "menu")]);
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");
        s.end_tag("div");
        s.start_tag("p", no_attrs());
        s.text(LONG);
        s.end_tag("p");

        let out = s.finish();
        assert_eq!(out.blocks, vec![LONG]);
        assert_eq!(out.stats.suppressed_runs, 1);
    }

    #[test]
    fn test_text_without_boundary_is_dropped() {
        let mut s = scanner();
        s.start_tag("span", no_attrs());
        s.text(LONG);
        s.end_tag("span");

        let out = s.finish();
        assert!(out.blocks.is_empty());
        assert!(out.trailing_text_dropped);
    }

    #[test]
    fn test_short_block_counted_as_dropped() {
        let mut s = scanner();
        s.start_tag("li", no_attrs());
        s.text("Home");
        s.end_tag("li");

        let out = s.finish();
        assert!(out.blocks.is_empty());
        assert_eq!(out.stats.blocks_dropped, 1);
    }

    #[test]
    fn test_unclosed_region_is_reported() {
        let mut s = scanner();
        s.start_tag("footer", no_attrs());
        let out = s.finish();
        assert_eq!(out.open_regions, vec!["footer".to_string()]);
    }
}

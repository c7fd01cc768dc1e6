//! Suppression state tracking.
//!
//! This module provides `SuppressionState`, the set of flags that decide
//! whether text met during scanning belongs to a boilerplate region.
//! Text is suppressed while any flag is set.

use std::collections::HashMap;

/// A boilerplate region opened by a dedicated tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Script,
    Style,
    /// `<nav>`, also raised by the class/id keyword heuristic.
    Nav,
    Header,
    Footer,
    Iframe,
    Noscript,
}

impl Region {
    /// All regions, in flag order.
    pub const ALL: [Region; 7] = [
        Region::Script,
        Region::Style,
        Region::Nav,
        Region::Header,
        Region::Footer,
        Region::Iframe,
        Region::Noscript,
    ];

    /// Map a lowercase tag name to the region it opens, if any.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "script" => Some(Self::Script),
            "style" => Some(Self::Style),
            "nav" => Some(Self::Nav),
            "header" => Some(Self::Header),
            "footer" => Some(Self::Footer),
            "iframe" => Some(Self::Iframe),
            "noscript" => Some(Self::Noscript),
            _ => None,
        }
    }

    /// Tag name that opens and closes this region.
    #[must_use]
    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Script => "script",
            Self::Style => "style",
            Self::Nav => "nav",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Iframe => "iframe",
            Self::Noscript => "noscript",
        }
    }
}

/// A keyword-matched container tracked in scoped mode.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScopedRegion {
    tag: String,
    /// Nesting depth of `tag` at the moment the region opened.
    depth: usize,
}

/// Tracks which boilerplate regions the scanner is currently inside.
///
/// # Flag semantics
///
/// - Dedicated tags (`script`, `style`, `nav`, `header`, `footer`, `iframe`,
///   `noscript`) set their flag on open and clear it on close. Flags are
///   plain booleans: nested same-name tags clear on the first close.
/// - A keyword-matched `div`/`section`/`aside` sets the `Nav` flag. That flag
///   is only cleared by `</nav>`, so the region normally outlives the element
///   that opened it.
/// - In scoped mode the keyword heuristic leaves the `Nav` flag alone and
///   instead records the matched element with its nesting depth; the region
///   ends when that same element closes.
#[derive(Debug, Clone, Default)]
pub struct SuppressionState {
    flags: [bool; Region::ALL.len()],
    scoped_mode: bool,
    scoped: Vec<ScopedRegion>,
    /// Open-element depth per heuristic container tag, scoped mode only.
    depths: HashMap<String, usize>,
}

impl SuppressionState {
    /// Create an empty state. `scoped_mode` selects how heuristic regions end.
    #[must_use]
    pub fn new(scoped_mode: bool) -> Self {
        Self {
            scoped_mode,
            ..Self::default()
        }
    }

    /// Whether text should currently be discarded.
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        self.flags.iter().any(|f| *f) || !self.scoped.is_empty()
    }

    /// Whether a specific region flag is set.
    #[must_use]
    pub fn is_set(&self, region: Region) -> bool {
        self.flags[region as usize]
    }

    /// Set the flag for a region.
    pub fn enter(&mut self, region: Region) {
        tracing::trace!(region = region.tag_name(), "entering suppressed region");
        self.flags[region as usize] = true;
    }

    /// Clear the flag for a region. Clearing an unset flag is a no-op.
    pub fn exit(&mut self, region: Region) {
        tracing::trace!(region = region.tag_name(), "leaving suppressed region");
        self.flags[region as usize] = false;
    }

    /// Record the opening of a heuristic container tag.
    ///
    /// `matched` says whether its class/id looked like boilerplate.
    pub fn open_container(&mut self, tag: &str, matched: bool) {
        if !self.scoped_mode {
            if matched {
                self.enter(Region::Nav);
            }
            return;
        }

        let depth = self.depths.entry(tag.to_string()).or_insert(0);
        *depth += 1;
        if matched {
            tracing::trace!(tag, depth = *depth, "entering scoped boilerplate region");
            self.scoped.push(ScopedRegion {
                tag: tag.to_string(),
                depth: *depth,
            });
        }
    }

    /// Record the closing of a heuristic container tag.
    ///
    /// Ends every scoped region opened by this tag at the current depth or
    /// deeper. Does nothing outside scoped mode.
    pub fn close_container(&mut self, tag: &str) {
        if !self.scoped_mode {
            return;
        }
        let Some(depth) = self.depths.get_mut(tag) else {
            return;
        };
        if *depth == 0 {
            return;
        }
        let current = *depth;
        *depth -= 1;
        self.scoped.retain(|r| !(r.tag == tag && r.depth >= current));
    }

    /// Names of regions still open, for end-of-document reporting.
    #[must_use]
    pub fn open_regions(&self) -> Vec<String> {
        let mut open: Vec<String> = Region::ALL
            .iter()
            .filter(|r| self.is_set(**r))
            .map(|r| r.tag_name().to_string())
            .collect();
        open.extend(self.scoped.iter().map(|r| r.tag.clone()));
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_not_suppressed() {
        let state = SuppressionState::new(false);
        assert!(!state.is_suppressed());
        assert!(state.open_regions().is_empty());
    }

    #[test]
    fn test_region_from_tag_round_trips_names() {
        for region in Region::ALL {
            assert_eq!(Region::from_tag(region.tag_name()), Some(region));
        }
        assert_eq!(Region::from_tag("div"), None);
        assert_eq!(Region::from_tag("aside"), None);
    }

    #[test]
    fn test_any_flag_suppresses() {
        let mut state = SuppressionState::new(false);
        state.enter(Region::Style);
        state.enter(Region::Footer);
        assert!(state.is_suppressed());

        state.exit(Region::Style);
        assert!(state.is_suppressed());
        state.exit(Region::Footer);
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_exit_unset_flag_is_noop() {
        let mut state = SuppressionState::new(false);
        state.exit(Region::Script);
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_flags_are_not_depth_counted() {
        let mut state = SuppressionState::new(false);
        state.enter(Region::Header);
        state.enter(Region::Header);
        state.exit(Region::Header);
        assert!(!state.is_set(Region::Header));
    }

    #[test]
    fn test_heuristic_match_sets_nav_flag() {
        let mut state = SuppressionState::new(false);
        state.open_container("div", true);
        assert!(state.is_set(Region::Nav));
    }

    #[test]
    fn test_heuristic_region_survives_container_close() {
        let mut state = SuppressionState::new(false);
        state.open_container("div", true);
        state.close_container("div");
        assert!(state.is_suppressed());

        state.exit(Region::Nav);
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_unmatched_container_does_not_suppress() {
        let mut state = SuppressionState::new(true);
        state.open_container("section", false);
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_scoped_region_ends_at_matching_close() {
        let mut state = SuppressionState::new(true);
        state.open_container("div", false); // outer content div
        state.open_container("div", true); // sidebar
        state.open_container("div", false); // inner widget
        assert!(state.is_suppressed());
        assert!(!state.is_set(Region::Nav));

        state.close_container("div"); // inner widget
        assert!(state.is_suppressed());
        state.close_container("div"); // sidebar
        assert!(!state.is_suppressed());
        state.close_container("div"); // outer
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_scoped_regions_keyed_by_tag() {
        let mut state = SuppressionState::new(true);
        state.open_container("aside", true);
        state.open_container("div", false);
        state.close_container("div");
        assert!(state.is_suppressed());
        state.close_container("aside");
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_scoped_nested_matches_unwind_in_order() {
        let mut state = SuppressionState::new(true);
        state.open_container("div", true);
        state.open_container("div", true);
        state.close_container("div");
        assert!(state.is_suppressed());
        state.close_container("div");
        assert!(!state.is_suppressed());
    }

    #[test]
    fn test_scoped_unmatched_close_is_ignored() {
        let mut state = SuppressionState::new(true);
        state.close_container("div");
        state.open_container("div", true);
        assert!(state.is_suppressed());
        state.close_container("section");
        assert!(state.is_suppressed());
    }

    #[test]
    fn test_open_regions_lists_flags_and_scoped() {
        let mut state = SuppressionState::new(true);
        state.enter(Region::Script);
        state.open_container("aside", true);
        assert_eq!(state.open_regions(), vec!["script".to_string(), "aside".to_string()]);
    }
}

//! Configuration options for article extraction.
//!
//! The `Options` struct controls the length limits applied while assembling
//! and finalizing text, and how class/id-matched boilerplate regions end.

use crate::error::{Error, Result};

/// Default cap on the number of characters in the extracted text.
pub const DEFAULT_MAX_LENGTH: usize = 15_000;

/// Default minimum block length. Blocks must be strictly longer to be kept.
pub const DEFAULT_MIN_BLOCK_LEN: usize = 30;

/// Default minimum text fragment length. Fragments must be strictly longer.
pub const DEFAULT_MIN_FRAGMENT_LEN: usize = 1;

/// Configuration options for article extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use article_extract::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.max_length, 15_000);
///
/// // Customize specific fields
/// let options = Options {
///     max_length: 4_000,
///     scoped_regions: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum number of characters in the extracted text.
    ///
    /// Longer text is hard-cut at exactly this many characters, with no
    /// word-boundary adjustment.
    ///
    /// Default: `15000`
    pub max_length: usize,

    /// Minimum block length (characters).
    ///
    /// A paragraph-like block is kept only when its trimmed text is strictly
    /// longer than this.
    ///
    /// Default: `30`
    pub min_block_len: usize,

    /// Minimum text fragment length (characters).
    ///
    /// A trimmed text run is buffered only when strictly longer than this,
    /// which drops stray single characters such as separators.
    ///
    /// Default: `1`
    pub min_fragment_len: usize,

    /// End class/id-matched boilerplate regions at their own closing tag.
    ///
    /// When `false`, a `div`/`section`/`aside` whose class or id looks like
    /// navigation suppresses text until a `</nav>` closes, regardless of
    /// where the matched element itself ends. When `true`, suppression is
    /// tracked per element and ends when the matched element closes.
    ///
    /// Default: `false`
    pub scoped_regions: bool,
}

impl Options {
    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if self.max_length == 0 {
            return Err(Error::InvalidOption {
                field: "max_length",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            min_block_len: DEFAULT_MIN_BLOCK_LEN,
            min_fragment_len: DEFAULT_MIN_FRAGMENT_LEN,
            scoped_regions: false,
        }
    }
}

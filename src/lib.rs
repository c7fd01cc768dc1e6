//! # article-extract
//!
//! Streaming article text extraction from HTML.
//!
//! This library pulls the readable prose out of a web page, dropping scripts,
//! styles, navigation, headers, footers, and class/id-flagged page furniture,
//! and returns it as one whitespace-normalized, length-capped string ready for
//! summarizers, search indexes, or language models.
//!
//! ## Quick Start
//!
//! ```rust
//! use article_extract::extract_article;
//!
//! let html = r#"<html><body>
//! <header>Site Nav</header>
//! <article><p>This is a sufficiently long paragraph of real article content.</p></article>
//! <footer>Copyright</footer>
//! </body></html>"#;
//!
//! let text = extract_article(html, 15_000);
//! assert_eq!(text, "This is a sufficiently long paragraph of real article content.");
//! ```
//!
//! ## How it works
//!
//! - **Scanning**: `html5ever`'s tokenizer streams tag and text events; no
//!   DOM is built
//! - **Classification**: boilerplate tags and keyword-matched containers
//!   suppress the text inside them
//! - **Assembly**: text between block-level closing tags forms a block; blocks
//!   of 30 characters or fewer are discarded
//! - **Finalizing**: blocks are joined, whitespace is collapsed, and the result
//!   is cut to the configured maximum length

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Streaming extraction components (tag catalogs, suppression state, scanner).
pub mod extractor;

/// Joining, whitespace normalization, and truncation of the final text.
pub mod finalize;

use std::path::Path;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_MAX_LENGTH, DEFAULT_MIN_BLOCK_LEN, DEFAULT_MIN_FRAGMENT_LEN};
pub use patterns::BOILERPLATE_KEYWORDS;
pub use result::{ExtractResult, ExtractStats};

/// Extracts article text from an HTML document.
///
/// Never fails: malformed markup is tokenized best-effort, and a document
/// without article text yields an empty string. The result holds at most
/// `max_length` characters; a `max_length` of zero yields an empty string.
///
/// # Example
///
/// ```rust
/// use article_extract::extract_article;
///
/// let html = "<p>Short</p><p>A paragraph long enough to survive the length filter.</p>";
/// assert_eq!(extract_article(html, 20), "A paragraph long eno");
/// ```
#[must_use]
pub fn extract_article(html: &str, max_length: usize) -> String {
    let options = Options {
        max_length,
        ..Options::default()
    };
    extract::extract_content(html, &options).text
}

/// Extracts article text and extraction details using default options.
///
/// # Example
///
/// ```rust
/// use article_extract::extract;
///
/// let result = extract("<article><p>Content long enough to keep in the output.</p></article>");
/// assert_eq!(result.blocks.len(), 1);
/// assert!(!result.truncated);
/// ```
#[must_use]
pub fn extract(html: &str) -> ExtractResult {
    extract::extract_content(html, &Options::default())
}

/// Extracts article text with custom options.
///
/// Returns `Error::InvalidOption` if the options fail validation.
///
/// # Example
///
/// ```rust
/// use article_extract::{extract_with_options, Options};
///
/// let options = Options {
///     max_length: 4_000,
///     scoped_regions: true,
///     ..Options::default()
/// };
/// let result = extract_with_options("<p>Some text</p>", &options)?;
/// assert!(result.text.is_empty());
/// # Ok::<(), article_extract::Error>(())
/// ```
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    options.validate()?;
    Ok(extract::extract_content(html, options))
}

/// Extracts article text from UTF-8 encoded bytes.
///
/// No encoding detection is performed: bytes that are not valid UTF-8 yield
/// `Error::Decode`.
///
/// # Example
///
/// ```rust
/// use article_extract::{extract_bytes, Error, Options};
///
/// let html = "<p>Caf\u{e9} culture is a long tradition in this city.</p>".as_bytes();
/// let result = extract_bytes(html, &Options::default())?;
/// assert!(result.text.contains("Café"));
///
/// let latin1 = b"<p>Caf\xE9</p>";
/// assert!(matches!(extract_bytes(latin1, &Options::default()), Err(Error::Decode(_))));
/// # Ok::<(), article_extract::Error>(())
/// ```
pub fn extract_bytes(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html = std::str::from_utf8(html)?;
    extract_with_options(html, options)
}

/// Reads a UTF-8 HTML file and extracts its article text.
///
/// Returns `Error::Io` if the file cannot be read and `Error::Decode` if it
/// is not valid UTF-8.
pub fn extract_file(path: impl AsRef<Path>, options: &Options) -> Result<ExtractResult> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    extract_bytes(&bytes, options)
}

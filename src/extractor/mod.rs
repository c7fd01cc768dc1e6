//! Streaming extraction components.
//!
//! # Module Structure
//!
//! - `tags`: Tag constants, catalogs, and helper functions
//! - `state`: Suppression flags for boilerplate regions
//! - `blocks`: Paragraph-like block assembly and length filtering
//! - `scanner`: Region classification over tag and text events
//! - `sink`: `html5ever` tokenizer adapter feeding the scanner
//!
//! # Usage
//!
//! ```rust
//! use article_extract::extractor::Scanner;
//! use article_extract::Options;
//!
//! let mut scanner = Scanner::new(&Options::default());
//! scanner.start_tag("div", [("class", "sidebar")]);
//! assert!(scanner.is_suppressed());
//!
//! scanner.start_tag("p", std::iter::empty::<(&str, &str)>());
//! scanner.text("Sidebar promotion text that is long enough to count.");
//! scanner.end_tag("p");
//!
//! let output = scanner.finish();
//! assert!(output.blocks.is_empty());
//! ```

pub mod blocks;
pub mod scanner;
pub mod sink;
pub mod state;
pub mod tags;

pub use blocks::{BlockAssembler, Flush};
pub use scanner::{ExtractStats, ScanOutput, Scanner};
pub use sink::{scan_document, ScanSink};
pub use state::{Region, SuppressionState};

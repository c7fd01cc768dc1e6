//! Extraction pipeline: scan, assemble, finalize.

use crate::extractor::scan_document;
use crate::finalize::finalize;
use crate::options::Options;
use crate::result::ExtractResult;

/// Run the full pipeline over one document.
///
/// Options are taken as given; callers validate them first where needed.
pub(crate) fn extract_content(html: &str, options: &Options) -> ExtractResult {
    tracing::debug!(html_len = html.len(), "starting article extraction");

    let scan = scan_document(html, options);
    let (text, truncated) = finalize(&scan.blocks, options.max_length);

    let mut warnings = Vec::new();
    if scan.trailing_text_dropped {
        warnings.push("Text after the last block boundary was dropped".to_string());
    }
    if !scan.open_regions.is_empty() {
        warnings.push(format!(
            "Boilerplate regions still open at end of document: {}",
            scan.open_regions.join(", ")
        ));
    }
    if truncated {
        warnings.push(format!("Text truncated to {} characters", options.max_length));
    }

    tracing::debug!(
        blocks_retained = scan.stats.blocks_retained,
        blocks_dropped = scan.stats.blocks_dropped,
        suppressed_runs = scan.stats.suppressed_runs,
        text_len = text.len(),
        truncated,
        "article extraction complete"
    );

    ExtractResult {
        text,
        blocks: scan.blocks,
        truncated,
        stats: scan.stats,
        warnings,
    }
}

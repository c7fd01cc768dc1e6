//! Paragraph-like block assembly.
//!
//! Text fragments accepted by the scanner accumulate in a buffer until a
//! block-boundary tag closes. The buffer is then joined into one candidate
//! block, kept if it is long enough, and cleared either way.

/// Outcome of flushing the fragment buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flush {
    /// The buffer held nothing.
    Empty,
    /// The joined text was long enough and was retained.
    Retained,
    /// The joined text was too short and was discarded.
    Dropped,
}

/// Groups text fragments into retained blocks.
#[derive(Debug, Clone, Default)]
pub struct BlockAssembler {
    min_block_len: usize,
    fragments: Vec<String>,
    blocks: Vec<String>,
}

impl BlockAssembler {
    /// Create an assembler keeping blocks strictly longer than `min_block_len`
    /// characters.
    #[must_use]
    pub fn new(min_block_len: usize) -> Self {
        Self {
            min_block_len,
            ..Self::default()
        }
    }

    /// Append a trimmed text fragment to the current block.
    pub fn push_fragment(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    /// Whether fragments are waiting for a block boundary.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.fragments.is_empty()
    }

    /// Close the current block.
    pub fn flush(&mut self) -> Flush {
        if self.fragments.is_empty() {
            return Flush::Empty;
        }

        let joined = self.fragments.join(" ");
        self.fragments.clear();

        let text = joined.trim();
        if text.chars().count() > self.min_block_len {
            self.blocks.push(text.to_string());
            Flush::Retained
        } else {
            Flush::Dropped
        }
    }

    /// Blocks retained so far, in document order.
    #[must_use]
    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Consume the assembler. Pending fragments are discarded.
    #[must_use]
    pub fn into_blocks(self) -> Vec<String> {
        self.blocks
    }
}

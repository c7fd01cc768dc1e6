//! Tokenizer adapter.
//!
//! Drives `html5ever`'s standalone tokenizer (no tree builder) and turns its
//! token stream into scanner events. The tokenizer splits character data at
//! newlines, entities, and parse errors; runs are stitched back together so
//! the scanner sees all text between two markup tokens as one event.

use std::cell::RefCell;

use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use tendril::StrTendril;

use super::scanner::{ScanOutput, Scanner};
use super::tags;
use crate::options::Options;

/// `TokenSink` feeding a [`Scanner`].
pub struct ScanSink {
    scanner: RefCell<Scanner>,
    pending: RefCell<StrTendril>,
}

impl ScanSink {
    #[must_use]
    pub fn new(scanner: Scanner) -> Self {
        Self {
            scanner: RefCell::new(scanner),
            pending: RefCell::new(StrTendril::new()),
        }
    }

    /// Deliver buffered character data as one text event.
    fn flush_text(&self) {
        let text = std::mem::take(&mut *self.pending.borrow_mut());
        if !text.is_empty() {
            self.scanner.borrow_mut().text(&text);
        }
    }

    /// Take the scanner's results. Call after the tokenizer has ended.
    #[must_use]
    pub fn finish(&self) -> ScanOutput {
        self.flush_text();
        self.scanner.take().finish()
    }
}

fn raw_kind(tag: &str) -> RawKind {
    if tag == "script" {
        RawKind::ScriptData
    } else {
        RawKind::Rawtext
    }
}

impl TokenSink for ScanSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::CharacterTokens(text) => self.pending.borrow_mut().push_tendril(&text),
            // U+0000 in data is a parse error and carries no content
            Token::NullCharacterToken => {}
            Token::ParseError(err) => tracing::trace!(%err, "tokenizer parse error"),
            Token::TagToken(tag) => {
                self.flush_text();
                let mut scanner = self.scanner.borrow_mut();
                match tag.kind {
                    TagKind::StartTag => {
                        scanner.start_tag(
                            &tag.name,
                            tag.attrs.iter().map(|a| (&*a.name.local, &*a.value)),
                        );
                        // `<x/>` opens and closes at once, and never enters raw text
                        if tag.self_closing {
                            scanner.end_tag(&tag.name);
                        } else if tags::is_raw_text_tag(&tag.name) {
                            return TokenSinkResult::RawData(raw_kind(&tag.name));
                        }
                    }
                    TagKind::EndTag => scanner.end_tag(&tag.name),
                }
            }
            // comments, doctypes, and EOF end the current text run
            _ => self.flush_text(),
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize a whole document and return what the scanner collected.
#[must_use]
pub fn scan_document(html: &str, options: &Options) -> ScanOutput {
    let tokenizer = Tokenizer::new(ScanSink::new(Scanner::new(options)), TokenizerOpts::default());

    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));
    // The sink never yields script handles, so one feed drains the queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.finish()
}

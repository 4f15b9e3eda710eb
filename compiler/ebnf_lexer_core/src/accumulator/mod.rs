//! Run-length coalescing of classified characters into tokens.
//!
//! Two states: no pending span, or a pending span of some kind starting at
//! a byte offset. Recording a character of a different kind flushes the
//! pending span and starts a new one; [`Accumulator::finish`] flushes the
//! last one. The pending text is never copied: it is the slice between the
//! span start and the cursor position.

use crate::cursor::Cursor;
use crate::kind::{Span, Token, TokenKind, TokenStream};

#[derive(Clone, Copy, Debug)]
struct Pending {
    kind: TokenKind,
    start: usize,
}

/// Collects recorded characters into a [`TokenStream`].
#[derive(Debug, Default)]
pub struct Accumulator<'a> {
    pending: Option<Pending>,
    tokens: Vec<Token<'a>>,
}

impl<'a> Accumulator<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify the current character as `kind` and advance past it.
    ///
    /// At EOF there is no character to record and this is a no-op.
    pub fn record(&mut self, kind: TokenKind, cursor: &mut Cursor<'a>) {
        if cursor.is_eof() {
            return;
        }
        self.begin(kind, cursor);
        cursor.advance();
    }

    /// Make `kind` the pending kind without consuming anything.
    ///
    /// Everything the cursor moves over afterwards, until the next kind
    /// change, belongs to that span.
    pub fn begin(&mut self, kind: TokenKind, cursor: &Cursor<'a>) {
        match self.pending {
            Some(p) if p.kind == kind => {}
            _ => {
                self.flush(cursor);
                self.pending = Some(Pending {
                    kind,
                    start: cursor.pos(),
                });
            }
        }
    }

    /// Flush the last pending span and return the completed stream.
    pub fn finish(mut self, cursor: &Cursor<'a>) -> TokenStream<'a> {
        self.flush(cursor);
        TokenStream::from_vec(self.tokens)
    }

    fn flush(&mut self, cursor: &Cursor<'a>) {
        let Some(Pending { kind, start }) = self.pending.take() else {
            return;
        };
        let end = cursor.pos();
        if end > start {
            self.tokens.push(Token {
                kind,
                text: cursor.slice(start, end),
                span: Span::new(start, end),
            });
        }
    }
}

#[cfg(test)]
mod tests;

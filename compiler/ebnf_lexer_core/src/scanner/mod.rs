//! Recognizer table and the top-level scan loop.
//!
//! At each step the scanner tries a fixed, ordered table of recognizers on
//! the current character. The first one that reports [`Recognized::Matched`]
//! has consumed at least one character; if none match, one character is
//! recorded as [`TokenKind::Unknown`]. The loop ends at EOF, so every input
//! is fully classified and the scan cannot fail.

use crate::accumulator::Accumulator;
use crate::cursor::Cursor;
use crate::kind::{TokenKind, TokenStream};

/// EBNF operator and delimiter characters.
pub const SYMBOLS: &str = "[]{}()<>=|.,;-+*?";

/// Unicode White_Space minus NEL (U+0085), plus BOM (U+FEFF).
#[inline]
pub fn is_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// `\w` in the ASCII sense: letters, digits, underscore.
#[inline]
pub fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// Outcome of asking a recognizer about the current character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use]
pub enum Recognized {
    /// The recognizer consumed one or more characters.
    Matched,
    /// The recognizer left the cursor untouched.
    NotMatched,
}

type Recognizer = fn(&mut Scanner<'_>) -> Recognized;

/// Tried in order; the first match wins.
const RECOGNIZERS: [Recognizer; 4] = [whitespace, name, string, symbol];

/// Single-pass classifier owning the cursor and accumulator for one scan.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    acc: Accumulator<'a>,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            acc: Accumulator::new(),
        }
    }

    /// Classify at least one character. No-op at EOF.
    pub fn step(&mut self) {
        if self.cursor.is_eof() {
            return;
        }
        for recognize in RECOGNIZERS {
            if recognize(self) == Recognized::Matched {
                return;
            }
        }
        self.record(TokenKind::Unknown);
    }

    /// Scan to EOF and return the completed stream.
    pub fn run(mut self) -> TokenStream<'a> {
        while !self.cursor.is_eof() {
            self.step();
        }
        self.acc.finish(&self.cursor)
    }

    #[inline]
    fn record(&mut self, kind: TokenKind) {
        self.acc.record(kind, &mut self.cursor);
    }

    fn record_while(&mut self, kind: TokenKind, pred: fn(char) -> bool) {
        while self.cursor.matches(pred) {
            self.record(kind);
        }
    }
}

/// Classify `source` into a loss-less token stream.
pub fn scan(source: &str) -> TokenStream<'_> {
    Scanner::new(source).run()
}

// ─── Recognizers ────────────────────────────────────────────────

fn whitespace(s: &mut Scanner<'_>) -> Recognized {
    if !s.cursor.matches(is_whitespace) {
        return Recognized::NotMatched;
    }
    s.record_while(TokenKind::Whitespace, is_whitespace);
    Recognized::Matched
}

fn name(s: &mut Scanner<'_>) -> Recognized {
    if !s.cursor.matches(is_word) {
        return Recognized::NotMatched;
    }
    s.record_while(TokenKind::Name, is_word);
    Recognized::Matched
}

/// Double-quoted literal. A backslash escapes whatever follows it; a missing
/// closing quote ends the token at EOF.
fn string(s: &mut Scanner<'_>) -> Recognized {
    if !s.cursor.matches(|c| c == '"') {
        return Recognized::NotMatched;
    }
    s.record(TokenKind::String);
    loop {
        s.acc.begin(TokenKind::String, &s.cursor);
        match s.cursor.skip_to_string_delim() {
            Some(b'\\') => {
                s.record(TokenKind::String);
                // Escaped char; no-op if the backslash was last.
                s.record(TokenKind::String);
            }
            Some(_) => {
                s.record(TokenKind::String);
                break;
            }
            None => break,
        }
    }
    Recognized::Matched
}

fn symbol(s: &mut Scanner<'_>) -> Recognized {
    if !s.cursor.matches(is_symbol) {
        return Recognized::NotMatched;
    }
    s.record(TokenKind::Symbol);
    Recognized::Matched
}

//! Token kinds and the classified token stream.

use std::fmt;
use std::ops::Range;

/// Classification of a run of input characters.
///
/// Declaration order is the order used by [`TokenKind::ALL`]; it carries no
/// priority meaning (recognizer priority lives in the scanner).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenKind {
    /// Anything no recognizer claimed.
    Unknown,
    /// Run of ASCII letters, digits, and underscores.
    Name,
    /// One of the EBNF operator/delimiter characters.
    Symbol,
    /// Double-quoted literal, possibly unterminated.
    String,
    /// Run of Unicode whitespace.
    Whitespace,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 5] = [
        TokenKind::Unknown,
        TokenKind::Name,
        TokenKind::Symbol,
        TokenKind::String,
        TokenKind::Whitespace,
    ];

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Unknown => "unknown",
            TokenKind::Name => "name",
            TokenKind::Symbol => "symbol",
            TokenKind::String => "string",
            TokenKind::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Half-open byte range into the scanned input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    #[inline]
    pub const fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A classified, non-empty slice of the input.
///
/// `text` always equals `&input[span.range()]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub span: Span,
}

/// Ordered tokens covering the whole input.
///
/// # Invariants
///
/// - Concatenating every token's `text` reproduces the input exactly.
/// - No two adjacent tokens share a [`TokenKind`].
/// - Every token is non-empty; the stream is empty iff the input was.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: Vec<Token<'a>>,
}

impl<'a> TokenStream<'a> {
    pub(crate) fn from_vec(tokens: Vec<Token<'a>>) -> Self {
        TokenStream { tokens }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.tokens.iter()
    }

    pub fn as_slice(&self) -> &[Token<'a>] {
        &self.tokens
    }

    pub fn into_vec(self) -> Vec<Token<'a>> {
        self.tokens
    }

    /// Reassemble the scanned input from the token texts.
    pub fn to_source(&self) -> String {
        self.tokens.iter().map(|t| t.text).collect()
    }
}

impl<'a> IntoIterator for TokenStream<'a> {
    type Item = Token<'a>;
    type IntoIter = std::vec::IntoIter<Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'s, 'a> IntoIterator for &'s TokenStream<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

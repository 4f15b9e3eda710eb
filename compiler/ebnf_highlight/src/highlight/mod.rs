//! Styled spans and per-kind totals for one scanned input.

use ebnf_lexer_core::{scan, TokenKind, TokenStream};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::trace;

use crate::style::style_class;

/// One token ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HighlightedSpan<'a> {
    pub kind: TokenKind,
    pub class: &'static str,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Token and byte totals for a single kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct KindCount {
    pub tokens: usize,
    pub bytes: usize,
}

/// Per-kind totals, indexed in [`TokenKind::ALL`] order.
///
/// Serializes as a map from kind name to [`KindCount`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KindStats {
    counts: [KindCount; TokenKind::ALL.len()],
}

impl KindStats {
    pub fn from_tokens(tokens: &TokenStream<'_>) -> Self {
        let mut stats = KindStats::default();
        for tok in tokens {
            let entry = &mut stats.counts[slot(tok.kind)];
            entry.tokens += 1;
            entry.bytes += tok.text.len();
        }
        stats
    }

    pub fn get(&self, kind: TokenKind) -> KindCount {
        self.counts[slot(kind)]
    }

    pub fn total_tokens(&self) -> usize {
        self.counts.iter().map(|c| c.tokens).sum()
    }

    pub fn total_bytes(&self) -> usize {
        self.counts.iter().map(|c| c.bytes).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TokenKind, KindCount)> + '_ {
        TokenKind::ALL.into_iter().zip(self.counts.iter().copied())
    }
}

impl Serialize for KindStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(kind.name(), &count)?;
        }
        map.end()
    }
}

fn slot(kind: TokenKind) -> usize {
    match kind {
        TokenKind::Unknown => 0,
        TokenKind::Name => 1,
        TokenKind::Symbol => 2,
        TokenKind::String => 3,
        TokenKind::Whitespace => 4,
    }
}

/// Styled spans for one input, in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Highlighted<'a> {
    pub spans: Vec<HighlightedSpan<'a>>,
    pub stats: KindStats,
}

impl<'a> Highlighted<'a> {
    /// Attach a style class to every token of an already scanned stream.
    pub fn from_tokens(tokens: TokenStream<'a>) -> Self {
        let stats = KindStats::from_tokens(&tokens);
        let spans = tokens
            .into_iter()
            .map(|tok| HighlightedSpan {
                kind: tok.kind,
                class: style_class(tok.kind),
                text: tok.text,
                start: tok.span.start,
                end: tok.span.end,
            })
            .collect();

        Highlighted { spans, stats }
    }

    /// Reassemble the highlighted input.
    pub fn to_source(&self) -> String {
        self.spans.iter().map(|s| s.text).collect()
    }
}

/// Scan `source` and attach a style class to every token.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn highlight(source: &str) -> Highlighted<'_> {
    let tokens = scan(source);
    trace!(tokens = tokens.len(), "scanned");
    Highlighted::from_tokens(tokens)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;

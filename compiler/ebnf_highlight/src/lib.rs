//! Presentation-facing view over the EBNF token stream.
//!
//! Wraps [`ebnf_lexer_core::scan`] with what a host needs to paint tokens:
//! a style class per kind, byte offsets, and per-kind totals. Markup
//! generation and escaping stay with the host.

mod example;
mod highlight;
mod style;

pub use ebnf_lexer_core::{Span, Token, TokenKind, TokenStream};
pub use example::{example_cell, ExampleCell, EXAMPLE_GRAMMAR};
pub use highlight::{highlight, Highlighted, HighlightedSpan, KindCount, KindStats};
pub use style::{style_class, STYLE_CLASSES};

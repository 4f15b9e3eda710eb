//! Lexical classifier for EBNF grammar notation.
//!
//! Turns raw grammar text into a loss-less, kind-tagged partition suitable
//! for syntax highlighting. There is no grammar-level validation here: every
//! character lands in exactly one of five [`TokenKind`]s and the scan never
//! fails.
//!
//! # Architecture
//!
//! ```text
//! &str ──► Cursor ──► Scanner (recognizer table) ──► Accumulator ──► TokenStream
//! ```
//!
//! - [`Cursor`] walks the input one `char` at a time.
//! - The scanner tries a fixed, ordered table of recognizers at each step.
//! - The [`Accumulator`] coalesces consecutive same-kind characters into a
//!   single [`Token`].
//!
//! # Example
//!
//! ```
//! use ebnf_lexer_core::{scan, TokenKind};
//!
//! let tokens = scan("digit = \"0\" ;");
//! let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Name,
//!         TokenKind::Whitespace,
//!         TokenKind::Symbol,
//!         TokenKind::Whitespace,
//!         TokenKind::String,
//!         TokenKind::Whitespace,
//!         TokenKind::Symbol,
//!     ]
//! );
//! assert_eq!(tokens.to_source(), "digit = \"0\" ;");
//! ```

mod accumulator;
mod cursor;
mod kind;
mod scanner;

pub use accumulator::Accumulator;
pub use cursor::Cursor;
pub use kind::{Span, Token, TokenKind, TokenStream};
pub use scanner::{is_symbol, is_whitespace, is_word, scan, Recognized, Scanner, SYMBOLS};

use super::*;
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, text: &str, start: usize) -> Token<'_> {
    Token {
        kind,
        text,
        span: Span::new(start, start + text.len()),
    }
}

#[test]
fn same_kind_records_merge() {
    let mut cursor = Cursor::new("abc");
    let mut acc = Accumulator::new();
    for _ in 0..3 {
        acc.record(TokenKind::Name, &mut cursor);
    }
    let stream = acc.finish(&cursor);
    assert_eq!(stream.into_vec(), vec![tok(TokenKind::Name, "abc", 0)]);
}

#[test]
fn kind_change_flushes() {
    let mut cursor = Cursor::new("a b");
    let mut acc = Accumulator::new();
    acc.record(TokenKind::Name, &mut cursor);
    acc.record(TokenKind::Whitespace, &mut cursor);
    acc.record(TokenKind::Name, &mut cursor);
    let stream = acc.finish(&cursor);
    assert_eq!(
        stream.into_vec(),
        vec![
            tok(TokenKind::Name, "a", 0),
            tok(TokenKind::Whitespace, " ", 1),
            tok(TokenKind::Name, "b", 2),
        ]
    );
}

#[test]
fn finish_without_records_is_empty() {
    let cursor = Cursor::new("");
    let stream = Accumulator::new().finish(&cursor);
    assert!(stream.is_empty());
}

#[test]
fn record_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    let mut acc = Accumulator::new();
    acc.record(TokenKind::Name, &mut cursor);
    acc.record(TokenKind::Symbol, &mut cursor);
    let stream = acc.finish(&cursor);
    assert_eq!(stream.into_vec(), vec![tok(TokenKind::Name, "x", 0)]);
}

#[test]
fn begin_then_move_claims_run() {
    let mut cursor = Cursor::new("\"abc\"");
    let mut acc = Accumulator::new();
    acc.record(TokenKind::String, &mut cursor);
    acc.begin(TokenKind::String, &cursor);
    cursor.skip_to_string_delim();
    acc.record(TokenKind::String, &mut cursor);
    let stream = acc.finish(&cursor);
    assert_eq!(stream.into_vec(), vec![tok(TokenKind::String, "\"abc\"", 0)]);
}

#[test]
fn begin_without_progress_leaves_no_empty_token() {
    let mut cursor = Cursor::new("a");
    let mut acc = Accumulator::new();
    acc.begin(TokenKind::String, &cursor);
    acc.record(TokenKind::Name, &mut cursor);
    let stream = acc.finish(&cursor);
    assert_eq!(stream.into_vec(), vec![tok(TokenKind::Name, "a", 0)]);
}

#[test]
fn multibyte_unknowns_merge() {
    let mut cursor = Cursor::new("€€");
    let mut acc = Accumulator::new();
    acc.record(TokenKind::Unknown, &mut cursor);
    acc.record(TokenKind::Unknown, &mut cursor);
    let stream = acc.finish(&cursor);
    assert_eq!(stream.into_vec(), vec![tok(TokenKind::Unknown, "€€", 0)]);
}

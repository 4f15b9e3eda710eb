use super::Cursor;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
}

#[test]
fn advance_moves_forward() {
    let mut cursor = Cursor::new("abc");
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn advance_through_entire_source() {
    let mut cursor = Cursor::new("hi");
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

// === EOF ===

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_at_eof_is_idempotent() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.pos(), 1);
    assert!(cursor.is_eof());
}

// === Matches ===

#[test]
fn matches_applies_predicate() {
    let cursor = Cursor::new("a1");
    assert!(cursor.matches(|c| c.is_ascii_alphabetic()));
    assert!(!cursor.matches(|c| c.is_ascii_digit()));
}

#[test]
fn matches_is_false_at_eof() {
    let cursor = Cursor::new("");
    assert!(!cursor.matches(|_| true));
}

// === Multi-byte characters ===

#[test]
fn advance_steps_over_whole_char() {
    let mut cursor = Cursor::new("é€x");
    assert_eq!(cursor.current(), Some('é'));
    cursor.advance();
    assert_eq!(cursor.pos(), 2);
    assert_eq!(cursor.current(), Some('€'));
    cursor.advance();
    assert_eq!(cursor.pos(), 5);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn slice_between_visited_positions() {
    let mut cursor = Cursor::new("λ = x");
    cursor.advance();
    assert_eq!(cursor.slice(0, cursor.pos()), "λ");
    assert_eq!(cursor.source(), "λ = x");
}

// === String delimiter skipping ===

#[test]
fn skip_to_quote() {
    let mut cursor = Cursor::new("abc\"rest");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'"'));
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_backslash_before_quote() {
    let mut cursor = Cursor::new("ab\\\"c\"");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'\\'));
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_without_delimiter_reaches_eof() {
    let mut cursor = Cursor::new("no delimiters here");
    assert_eq!(cursor.skip_to_string_delim(), None);
    assert!(cursor.is_eof());
}

#[test]
fn skip_over_multibyte_content() {
    let mut cursor = Cursor::new("日本\"");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'"'));
    assert_eq!(cursor.current(), Some('"'));
}

#[test]
fn skip_at_delimiter_does_not_move() {
    let mut cursor = Cursor::new("\"");
    assert_eq!(cursor.skip_to_string_delim(), Some(b'"'));
    assert_eq!(cursor.pos(), 0);
}

use super::*;
use crate::EXAMPLE_GRAMMAR;
use pretty_assertions::assert_eq;

#[test]
fn spans_carry_classes_and_offsets() {
    let out = highlight("a = \"b\";");
    let view: Vec<(&str, &str, usize, usize)> = out
        .spans
        .iter()
        .map(|s| (s.class, s.text, s.start, s.end))
        .collect();
    assert_eq!(
        view,
        vec![
            ("token-name", "a", 0, 1),
            ("token-whitespace", " ", 1, 2),
            ("token-symbol", "=", 2, 3),
            ("token-whitespace", " ", 3, 4),
            ("token-string", "\"b\"", 4, 7),
            ("token-symbol", ";", 7, 8),
        ]
    );
}

#[test]
fn stats_count_tokens_and_bytes() {
    let out = highlight("ab cd @");
    assert_eq!(out.stats.get(TokenKind::Name), KindCount { tokens: 2, bytes: 4 });
    assert_eq!(
        out.stats.get(TokenKind::Whitespace),
        KindCount { tokens: 2, bytes: 2 }
    );
    assert_eq!(out.stats.get(TokenKind::Unknown), KindCount { tokens: 1, bytes: 1 });
    assert_eq!(out.stats.get(TokenKind::String), KindCount::default());
    assert_eq!(out.stats.total_tokens(), 5);
    assert_eq!(out.stats.total_bytes(), 7);
}

#[test]
fn from_tokens_matches_highlight() {
    let source = "a = [ \"b\" ] ;";
    assert_eq!(Highlighted::from_tokens(scan(source)), highlight(source));
}

#[test]
fn empty_input() {
    let out = highlight("");
    assert!(out.spans.is_empty());
    assert_eq!(out.stats, KindStats::default());
    assert_eq!(out.to_source(), "");
}

#[test]
fn example_grammar_round_trips() {
    let out = highlight(EXAMPLE_GRAMMAR);
    assert_eq!(out.to_source(), EXAMPLE_GRAMMAR);
    assert_eq!(out.stats.total_bytes(), EXAMPLE_GRAMMAR.len());
    assert!(out.stats.get(TokenKind::String).tokens > 0);
}

#[test]
fn single_quote_is_unknown_and_quote_inside_opens_string() {
    let out = highlight("a = \"'\" | '\"' ;");
    let kinds: Vec<TokenKind> = out.spans.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Name,
            TokenKind::Whitespace,
            TokenKind::Symbol,
            TokenKind::Whitespace,
            TokenKind::String,
            TokenKind::Whitespace,
            TokenKind::Symbol,
            TokenKind::Whitespace,
            TokenKind::Unknown,
            TokenKind::String,
        ]
    );
}

#[test]
fn serializes_to_json() {
    let out = highlight("x;");
    let json = serde_json::to_value(&out).expect("highlight output serializes");
    assert_eq!(
        json,
        serde_json::json!({
            "spans": [
                { "kind": "name", "class": "token-name", "text": "x", "start": 0, "end": 1 },
                { "kind": "symbol", "class": "token-symbol", "text": ";", "start": 1, "end": 2 }
            ],
            "stats": {
                "unknown": { "tokens": 0, "bytes": 0 },
                "name": { "tokens": 1, "bytes": 1 },
                "symbol": { "tokens": 1, "bytes": 1 },
                "string": { "tokens": 0, "bytes": 0 },
                "whitespace": { "tokens": 0, "bytes": 0 }
            }
        })
    );
}

mod proptest_highlight {
    use super::super::highlight;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn stats_cover_every_byte(source in any::<String>()) {
            let out = highlight(&source);
            prop_assert_eq!(out.stats.total_bytes(), source.len());
            prop_assert_eq!(out.stats.total_tokens(), out.spans.len());
            prop_assert_eq!(out.to_source(), source);
        }
    }
}

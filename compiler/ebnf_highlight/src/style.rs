//! Kind to style-class mapping.

use ebnf_lexer_core::TokenKind;

/// Every style class, in [`TokenKind::ALL`] order.
pub const STYLE_CLASSES: [&str; 5] = [
    style_class(TokenKind::Unknown),
    style_class(TokenKind::Name),
    style_class(TokenKind::Symbol),
    style_class(TokenKind::String),
    style_class(TokenKind::Whitespace),
];

/// CSS class a host attaches to spans of `kind`.
pub const fn style_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Unknown => "token-unknown",
        TokenKind::Name => "token-name",
        TokenKind::Symbol => "token-symbol",
        TokenKind::String => "token-string",
        TokenKind::Whitespace => "token-whitespace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_kind_order() {
        for (kind, class) in TokenKind::ALL.into_iter().zip(STYLE_CLASSES) {
            assert_eq!(style_class(kind), class);
            assert_eq!(class, format!("token-{}", kind.name()));
        }
    }
}

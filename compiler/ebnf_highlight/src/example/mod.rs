//! Bundled sample content: EBNF described in EBNF.

use serde::Serialize;

/// A titled piece of grammar with a short description, as a host shows it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ExampleCell {
    pub title: &'static str,
    pub text: &'static str,
    pub grammar: &'static str,
}

pub fn example_cell() -> ExampleCell {
    ExampleCell {
        title: "EBNF",
        text: "A small notation for describing grammars rather than a language of its own. \
               It is compact and widely used, and this grammar exercises every token kind \
               the highlighter knows about.",
        grammar: EXAMPLE_GRAMMAR,
    }
}

/// Grammar of EBNF itself. Backslash sequences such as `"\n"` are literal
/// two-character text, not escapes.
pub const EXAMPLE_GRAMMAR: &str = r#"letter = "A" | "B" | "C" | "D" | "E" | "F" | "G"
       | "H" | "I" | "J" | "K" | "L" | "M" | "N"
       | "O" | "P" | "Q" | "R" | "S" | "T" | "U"
       | "V" | "W" | "X" | "Y" | "Z" | "a" | "b"
       | "c" | "d" | "e" | "f" | "g" | "h" | "i"
       | "j" | "k" | "l" | "m" | "n" | "o" | "p"
       | "q" | "r" | "s" | "t" | "u" | "v" | "w"
       | "x" | "y" | "z" ;

digit = "0" | "1" | "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9" ;

symbol = "[" | "]" | "{" | "}" | "(" | ")" | "<" | ">"
       | "'" | '"' | "=" | "|" | "." | "," | ";" | "-"
       | "+" | "*" | "?" | "\n" | "\t" | "\r" | "\f" | "\b" ;

character = letter | digit | symbol | "_" | " " ;
identifier = letter , { letter | digit | "_" } ;

S = { " " | "\n" | "\t" | "\r" | "\f" | "\b" } ;

terminal = "'" , character - "'" , { character - "'" } , "'"
         | '"' , character - '"' , { character - '"' } , '"' ;

terminator = ";" | "." ;

term = "(" , S , rhs , S , ")"
     | "[" , S , rhs , S , "]"
     | "{" , S , rhs , S , "}"
     | terminal
     | identifier ;

factor = term , S , "?"
       | term , S , "*"
       | term , S , "+"
       | term , S , "-" , S , term
       | term , S ;

concatenation = ( S , factor , S , "," ? ) + ;
alternation = ( S , concatenation , S , "|" ? ) + ;

rhs = alternation ;
lhs = identifier ;

rule = lhs , S , "=" , S , rhs , S , terminator ;

grammar = ( S , rule , S ) * ;"#;

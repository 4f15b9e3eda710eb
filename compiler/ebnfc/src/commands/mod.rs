//! Command handlers for the `ebnf` CLI.
//!
//! Each `run_*` reads its input, renders to a `String` via the matching
//! `render_*`, and prints. Rendering never touches stdout so tests can
//! compare output directly.

use std::fmt::Write as _;

use ebnf_highlight::{example_cell, Highlighted, KindStats};
use ebnf_lexer_core::{scan, TokenStream};

use crate::{read_source, CliError, LexOptions, OutputFormat, StatsOptions};

/// Render a scanned token stream in the requested format.
pub fn render_tokens(tokens: TokenStream<'_>, options: &LexOptions) -> Result<String, CliError> {
    let mut out = String::new();
    match options.format {
        OutputFormat::Table => {
            for tok in &tokens {
                let _ = write!(out, "  {:?}({:?})", tok.kind, tok.text);
                if options.show_spans {
                    let _ = write!(out, " @ {}", tok.span);
                }
                out.push('\n');
            }
        }
        OutputFormat::Classes => {
            for span in Highlighted::from_tokens(tokens).spans {
                let _ = writeln!(out, "{}\t{:?}", span.class, span.text);
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&Highlighted::from_tokens(tokens))?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Render per-kind token and byte totals.
pub fn render_stats(source: &str) -> String {
    let stats = KindStats::from_tokens(&scan(source));
    let mut out = String::new();
    for (kind, count) in stats.iter() {
        let _ = writeln!(
            out,
            "  {:<12}{:>8} tokens{:>10} bytes",
            kind.name(),
            count.tokens,
            count.bytes
        );
    }
    let _ = writeln!(
        out,
        "  {:<12}{:>8} tokens{:>10} bytes",
        "total",
        stats.total_tokens(),
        stats.total_bytes()
    );
    out
}

/// Scan a file and print its tokens.
pub fn run_lex(options: &LexOptions) -> Result<(), CliError> {
    let path = options
        .path
        .as_deref()
        .ok_or(CliError::MissingPath { command: "lex" })?;
    let source = read_source(path)?;
    let tokens = scan(&source);
    let count = tokens.len();
    let rendered = render_tokens(tokens, options)?;

    if options.format == OutputFormat::Table {
        println!("Tokens for '{path}' ({count} tokens):");
    }
    print!("{rendered}");
    Ok(())
}

/// Scan a file and print per-kind totals.
pub fn run_stats(options: &StatsOptions) -> Result<(), CliError> {
    let path = options
        .path
        .as_deref()
        .ok_or(CliError::MissingPath { command: "stats" })?;
    let source = read_source(path)?;
    println!("Token kinds for '{path}':");
    print!("{}", render_stats(&source));
    Ok(())
}

/// Print the bundled example grammar.
pub fn run_example() {
    let cell = example_cell();
    println!("{}", cell.grammar);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

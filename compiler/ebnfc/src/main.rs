//! EBNF highlighter CLI
//!
//! Inspect how grammar text is classified for highlighting.

use ebnfc::commands::{run_example, run_lex, run_stats};
use ebnfc::{init_tracing, parse_lex_options, parse_stats_options, CliError};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result = match command.as_str() {
        "lex" => parse_lex_options(&args[2..]).and_then(|options| run_lex(&options)),
        "stats" => parse_stats_options(&args[2..]).and_then(|options| run_stats(&options)),
        "example" => {
            run_example();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("ebnf {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => Err(CliError::UnknownCommand(command.clone())),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        if matches!(err, CliError::UnknownCommand(_)) {
            eprintln!();
            print_usage();
        }
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("EBNF highlighter");
    println!();
    println!("Usage: ebnf <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file|->         Classify a grammar and display tokens");
    println!("  stats <file|->       Display per-kind token and byte totals");
    println!("  example              Print the bundled example grammar");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options for lex:");
    println!("  --format=<fmt>       table (default), json, classes");
    println!("  --json               Shorthand for --format=json");
    println!("  --spans              Show byte offsets in table output");
    println!();
    println!("stats takes only a path; output flags are rejected.");
    println!();
    println!("Logging: set RUST_LOG (e.g. RUST_LOG=ebnf_highlight=debug)");
}

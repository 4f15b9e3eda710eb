//! Options for the `lex` and `stats` commands.

use std::str::FromStr;

use crate::input::STDIN_PATH;
use crate::CliError;

/// How `lex` prints the token stream.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `  Kind("text")` per token.
    #[default]
    Table,
    /// Pretty-printed JSON object: `{ "spans": [...], "stats": {...} }`.
    Json,
    /// `class<TAB>"text"` per token.
    Classes,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "classes" => Ok(OutputFormat::Classes),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Input file, or `-` for stdin. `None` until a positional is seen.
    pub path: Option<String>,
    pub format: OutputFormat,
    /// Append ` @ start..end` to table rows.
    pub show_spans: bool,
}

/// Parse arguments following the command name.
///
/// Flags may come before or after the path. A lone `-` is the stdin path,
/// not a flag.
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();

    for arg in args {
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = format.parse()?;
        } else if arg == "--json" {
            options.format = OutputFormat::Json;
        } else if arg == "--spans" {
            options.show_spans = true;
        } else if (arg == STDIN_PATH || !arg.starts_with('-')) && options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(options)
}

/// Options for `stats`: only the input path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsOptions {
    /// Input file, or `-` for stdin.
    pub path: Option<String>,
}

/// Parse arguments following `stats`. Output flags are rejected; the totals
/// table has a single format.
pub fn parse_stats_options(args: &[String]) -> Result<StatsOptions, CliError> {
    let mut options = StatsOptions::default();

    for arg in args {
        if (arg == STDIN_PATH || !arg.starts_with('-')) && options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(options)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

//! Reading grammar text from a file or stdin.

use std::io::{self, Read};

use tracing::debug;

use crate::CliError;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Read the whole input named by `path` (`-` for stdin) as UTF-8.
pub fn read_source(path: &str) -> Result<String, CliError> {
    let source = if path == STDIN_PATH {
        let mut text = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| CliError::reading("<stdin>", e))?;
        text
    } else {
        std::fs::read_to_string(path).map_err(|e| CliError::reading(path, e))?
    };
    debug!(path, bytes = source.len(), "read source");
    Ok(source)
}

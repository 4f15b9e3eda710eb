//! Errors surfaced to the CLI user.

use std::io;

use thiserror::Error;

/// Everything that can stop a command. The scanner itself never fails;
/// these all come from reading input or interpreting arguments.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("missing file path\nUsage: ebnf {command} <file|-> [options]")]
    MissingPath { command: &'static str },

    #[error("unknown output format '{0}' (expected table, json, or classes)")]
    UnknownFormat(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("failed to serialize tokens: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CliError {
    /// Classify an I/O failure while reading `path`.
    pub(crate) fn reading(path: &str, err: io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}

//! Error types for embedding and literal parsing.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by [`embed`](crate::embed) and [`check`](crate::check).
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Input file {} was not found", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input file {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write output file {}", .path.display())]
    OutputUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Only produced by the freshness check.
    #[error("Failed to read existing output file {}", .path.display())]
    OutputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl EmbedError {
    /// Maps a failure to open or read the input file.
    pub(crate) fn from_input(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::InputNotFound { path },
            _ => Self::InputUnreadable { path, source },
        }
    }
}

/// Errors returned by [`parse_literal`](crate::parse_literal).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Declaration is not a {} array", crate::ARRAY_IDENTIFIER)]
    MissingPrefix,

    #[error("Declaration does not end with the closing brace and semicolon")]
    MissingSuffix,

    #[error("Invalid byte literal {element:?} at element {index}")]
    InvalidElement { index: usize, element: String },
}

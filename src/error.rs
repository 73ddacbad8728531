//! Error types for reading debug dumps.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Position,
    Normal,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Position => f.write_str("position"),
            Field::Normal => f.write_str("normal"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected 2 `;`-separated fields, found {found}")]
    MissingFields { found: usize },

    #[error("expected 3 `,`-separated components, found {found}")]
    MissingComponents { found: usize },

    #[error("invalid number {text:?}")]
    InvalidNumber { text: String },

    /// One of the two vectors of a record failed to parse.
    #[error("invalid {field} vector")]
    InvalidVector {
        field: Field,
        #[source]
        source: Box<ParseError>,
    },
}

/// Errors from reading a dump file.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("failed to open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through the dump.
    #[error("failed to read line {line_number}")]
    Read {
        line_number: usize,
        #[source]
        source: io::Error,
    },

    #[error("malformed line {line_number}: {line:?}")]
    Malformed {
        line_number: usize,
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to write output")]
    Write(#[source] io::Error),
}

/// Result type for dump operations.
pub type Result<T> = std::result::Result<T, DumpError>;

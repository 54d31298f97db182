//! All error types for the stringsheet crate.
//!
//! Every fallible operation (path validation, walking, parsing, writing) returns [`Error`].
//! Converters wrap lower-level failures in [`Error::Stage`] so the message names the step
//! that failed.

use std::{fmt, path::PathBuf};

use thiserror::Error;

/// Which configured path a [`Error::PathNotFound`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRole {
    Source,
    Output,
}

impl fmt::Display for PathRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathRole::Source => write!(f, "source"),
            PathRole::Output => write!(f, "output"),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("{role} path not found: {}", path.display())]
    PathNotFound { role: PathRole, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("directory walk failed: {0}")]
    Walk(#[from] ignore::Error),

    #[error("empty tabular file, no header row: {}", .0.display())]
    EmptyTable(PathBuf),

    #[error(
        "{}:{line}: row has {found} value(s) but the header declares {expected} language(s)",
        path.display()
    )]
    ShortRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("invalid delimiter `{0}`: the delimiter must not be empty")]
    InvalidDelimiter(String),

    #[error("{stage}: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps an error with the name of the conversion stage that produced it.
    pub fn in_stage(stage: impl Into<String>, source: impl Into<Error>) -> Self {
        Error::Stage {
            stage: stage.into(),
            source: Box::new(source.into()),
        }
    }

    /// Returns the innermost error, skipping any [`Error::Stage`] wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Stage { source, .. } => source.root(),
            other => other,
        }
    }
}

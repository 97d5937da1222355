use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdbError {
    #[error("File not found or unreadable: '{path}': {source}", path = path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: ParseErrorKind },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("Invalid integer for {field} in columns {columns} (value: '{value}')")]
    InvalidInt {
        field: &'static str,
        columns: &'static str,
        value: String,
    },
    #[error("Invalid float for {field} in columns {columns} (value: '{value}')")]
    InvalidFloat {
        field: &'static str,
        columns: &'static str,
        value: String,
    },
}

impl ParseErrorKind {
    /// Name of the offending field (e.g. "x", "serial").
    pub fn field(&self) -> &'static str {
        match self {
            ParseErrorKind::InvalidInt { field, .. } | ParseErrorKind::InvalidFloat { field, .. } => {
                *field
            }
        }
    }
}

impl PdbError {
    /// The 1-based line number of a parse error.
    pub fn line(&self) -> Option<usize> {
        match self {
            PdbError::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn field(&self) -> Option<&'static str> {
        match self {
            PdbError::Parse { kind, .. } => Some(kind.field()),
            _ => None,
        }
    }

    pub fn is_file_not_found(&self) -> bool {
        matches!(self, PdbError::FileNotFound { .. })
    }
}

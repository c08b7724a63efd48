//! Errors reported by grammar operations.

use std::error::Error;
use std::fmt;

/// The kind of a `GrammarError`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed input to a mutation: a duplicate symbol, a symbol of the wrong
    /// kind, or a production referencing undefined symbols.
    Validation,
    /// An operation was invoked on a grammar that does not satisfy its
    /// precondition.
    Precondition,
    /// A word given to the recognizer contains a symbol outside the terminal
    /// alphabet.
    Word,
}

/// Represents a failed grammar operation. The grammar is left unchanged.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GrammarError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Human-readable reason for the error.
    pub reason: String,
}

/// Result of a grammar operation.
pub type Result<T> = std::result::Result<T, GrammarError>;

impl GrammarError {
    pub(crate) fn validation(reason: impl Into<String>) -> Self {
        GrammarError {
            kind: ErrorKind::Validation,
            reason: reason.into(),
        }
    }

    pub(crate) fn precondition(reason: impl Into<String>) -> Self {
        GrammarError {
            kind: ErrorKind::Precondition,
            reason: reason.into(),
        }
    }

    pub(crate) fn word(reason: impl Into<String>) -> Self {
        GrammarError {
            kind: ErrorKind::Word,
            reason: reason.into(),
        }
    }

    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Validation => f.write_str("validation"),
            ErrorKind::Precondition => f.write_str("precondition"),
            ErrorKind::Word => f.write_str("word"),
        }
    }
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} error: {}", self.kind, self.reason)
    }
}

impl Error for GrammarError {}

//! Error handling and diagnostics for the Monkey front end
//!
//! This module provides the error taxonomy shared by the lexer, the parser
//! and the command-line shell, along with source locations for reporting.

use std::fmt;

use crate::lexer::TokenKind;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for Monkey operations
pub type MonkeyResult<T> = Result<T, MonkeyError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize) -> Self {
        Self::new(line, column, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Main error type for the Monkey front end
#[derive(Debug, Clone, PartialEq)]
pub enum MonkeyError {
    /// A character the lexer could not classify reached the parser
    IllegalToken {
        literal: String,
        location: SourceLocation,
    },
    /// The grammar required one token kind and another was found
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
        literal: String,
        location: SourceLocation,
    },
    /// Input ended where the grammar required more tokens
    UnexpectedEof {
        expected: TokenKind,
        location: SourceLocation,
    },
    /// Reading source text failed
    Io {
        message: String,
    },
}

impl MonkeyError {
    /// Create an illegal token error
    pub fn illegal_token(literal: impl Into<String>, location: SourceLocation) -> Self {
        Self::IllegalToken {
            literal: literal.into(),
            location,
        }
    }

    /// Create an unexpected token error
    pub fn unexpected_token(
        expected: TokenKind,
        found: TokenKind,
        literal: impl Into<String>,
        location: SourceLocation,
    ) -> Self {
        Self::UnexpectedToken {
            expected,
            found,
            literal: literal.into(),
            location,
        }
    }

    /// Create an unexpected end of input error
    pub fn unexpected_eof(expected: TokenKind, location: SourceLocation) -> Self {
        Self::UnexpectedEof { expected, location }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::IllegalToken { .. } => "Lexer Error",
            Self::UnexpectedToken { .. } | Self::UnexpectedEof { .. } => "Parse Error",
            Self::Io { .. } => "I/O Error",
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::IllegalToken { literal, .. } => format!("illegal character '{}'", literal),
            Self::UnexpectedToken {
                expected,
                found,
                literal,
                ..
            } => format!(
                "expected next token to be {}, got {} ('{}') instead",
                expected, found, literal
            ),
            Self::UnexpectedEof { expected, .. } => {
                format!("expected {}, reached end of input", expected)
            }
            Self::Io { message } => message.clone(),
        }
    }

    /// Get the source location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::IllegalToken { location, .. }
            | Self::UnexpectedToken { location, .. }
            | Self::UnexpectedEof { location, .. } => Some(location),
            Self::Io { .. } => None,
        }
    }
}

impl fmt::Display for MonkeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(location) = self.location() {
            write!(f, "{}: {} at {}", self.kind(), self.message(), location)
        } else {
            write!(f, "{}: {}", self.kind(), self.message())
        }
    }
}

impl std::error::Error for MonkeyError {}

//! # Monkey Programming Language
//!
//! Front end for the Monkey language: a lexical scanner producing typed
//! tokens and a statement parser building an abstract syntax tree.
//!
//! ## Architecture
//!
//! The implementation is organized into several modules:
//! - `lexer`: Token kinds, keyword table and the pull-based scanner
//! - `parser`: AST node definitions and the recursive-descent parser
//! - `error`: Error taxonomy, source locations and diagnostics

pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use error::{Diagnostic, MonkeyError, MonkeyResult, SourceLocation};
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{Node, Parser, Program};

/// Version of the Monkey front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a Monkey program from source code
///
/// Runs the lexer and parser over `source` and returns the program when the
/// parser recorded no errors.
///
/// # Arguments
///
/// * `source` - The source code to parse
/// * `filename` - Optional filename for error reporting
///
/// # Returns
///
/// Returns the parsed `Program`, or every `MonkeyError` the parser recorded.
pub fn parse(source: &str, filename: Option<&str>) -> Result<Program, Vec<MonkeyError>> {
    let lexer = Lexer::new(source, filename);
    let mut parser = Parser::new(lexer);
    let program = parser.parse_program();

    let errors = parser.into_errors();
    if errors.is_empty() {
        Ok(program)
    } else {
        Err(errors)
    }
}

/// Scan `source` into tokens, up to and including EOF
pub fn tokenize(source: &str, filename: Option<&str>) -> Vec<Token> {
    Lexer::new(source, filename).tokenize()
}

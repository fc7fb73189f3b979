//! Token definitions for the Monkey language
//!
//! This module defines the closed set of token kinds and the keyword table
//! that decides whether an identifier-shaped lexeme is a reserved word.

use crate::error::SourceLocation;
use std::fmt;

/// A token in the Monkey language
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub location: SourceLocation,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            literal: literal.into(),
            location,
        }
    }

    /// Placeholder held by the parser's lookahead window before it is primed
    pub(crate) fn unset() -> Self {
        Self::new(TokenKind::Illegal, String::new(), SourceLocation::default())
    }
}

// Locations are reporting metadata; two tokens are the same token when they
// classify the same lexeme.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.literal == other.literal
    }
}

impl Eq for Token {}

/// Token kinds in the Monkey language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Ident,
    Int,

    // Operators
    Assign,     // =
    Plus,       // +
    Minus,      // -
    Bang,       // !
    Asterisk,   // *
    Slash,      // /
    Lt,         // <
    Gt,         // >
    Eq,         // ==
    NotEq,      // !=

    // Delimiters
    Comma,      // ,
    Semicolon,  // ;
    LParen,     // (
    RParen,     // )
    LBrace,     // {
    RBrace,     // }

    // Keywords
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

/// Reserved words and the kinds they classify as
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("fn", TokenKind::Function),
    ("let", TokenKind::Let),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Classify an identifier-shaped lexeme as a keyword or a user identifier
pub fn lookup_ident(ident: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|&(_, kind)| kind)
        .unwrap_or(TokenKind::Ident)
}

impl TokenKind {
    /// Whether this kind is a reserved word
    pub fn is_keyword(&self) -> bool {
        self.keyword_str().is_some()
    }

    /// Get the reserved spelling of a keyword kind
    pub fn keyword_str(&self) -> Option<&'static str> {
        KEYWORDS
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|&(word, _)| word)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Illegal => write!(f, "ILLEGAL"),
            Self::Eof => write!(f, "EOF"),
            Self::Ident => write!(f, "IDENT"),
            Self::Int => write!(f, "INT"),
            Self::Assign => write!(f, "="),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Bang => write!(f, "!"),
            Self::Asterisk => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Lt => write!(f, "<"),
            Self::Gt => write!(f, ">"),
            Self::Eq => write!(f, "=="),
            Self::NotEq => write!(f, "!="),
            Self::Comma => write!(f, ","),
            Self::Semicolon => write!(f, ";"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBrace => write!(f, "{{"),
            Self::RBrace => write!(f, "}}"),
            Self::Function => write!(f, "FUNCTION"),
            Self::Let => write!(f, "LET"),
            Self::True => write!(f, "TRUE"),
            Self::False => write!(f, "FALSE"),
            Self::If => write!(f, "IF"),
            Self::Else => write!(f, "ELSE"),
            Self::Return => write!(f, "RETURN"),
        }
    }
}

//! Parser implementation
//!
//! Recursive descent over a two-token window (`cur_token`, `peek_token`)
//! pulled from an owned [`Lexer`]. Structural errors are collected rather
//! than returned, so one malformed statement does not stop the parse.

use super::ast::*;
use crate::error::MonkeyError;
use crate::lexer::{Lexer, Token, TokenKind};

/// Parser for Monkey source code
pub struct Parser {
    lexer: Lexer,
    cur_token: Token,
    peek_token: Token,
    errors: Vec<MonkeyError>,
}

impl Parser {
    /// Create a new parser, primed so `cur_token` holds the first token
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Self {
            lexer,
            cur_token: Token::unset(),
            peek_token: Token::unset(),
            errors: Vec::new(),
        };

        // First call fills peek_token, second shifts it into cur_token
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Errors recorded so far
    pub fn errors(&self) -> &[MonkeyError] {
        &self.errors
    }

    /// Take ownership of the recorded errors
    pub fn into_errors(self) -> Vec<MonkeyError> {
        self.errors
    }

    /// Parse statements until EOF
    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.cur_token_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        Program { statements }
    }

    // ===== Statements =====

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Illegal => {
                self.illegal_token_error();
                None
            }
            _ => None,
        }
    }

    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenKind::Ident) {
            self.synchronize();
            return None;
        }

        let name = Identifier::from_token(self.cur_token.clone());

        if !self.expect_peek(TokenKind::Assign) {
            self.synchronize();
            return None;
        }

        // Right-hand side expressions are skipped until the terminator
        while !self.cur_token_is(TokenKind::Semicolon) {
            if self.peek_token_is(TokenKind::Eof) {
                self.errors.push(MonkeyError::unexpected_eof(
                    TokenKind::Semicolon,
                    self.peek_token.location.clone(),
                ));
                return None;
            }
            self.next_token();
            if self.cur_token_is(TokenKind::Illegal) {
                self.illegal_token_error();
            }
        }

        Some(LetStatement {
            token,
            name,
            value: None,
        })
    }

    /// Skip to the end of a malformed statement: the next SEMICOLON, or the
    /// last token before EOF
    fn synchronize(&mut self) {
        while !self.cur_token_is(TokenKind::Semicolon) && !self.peek_token_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    // ===== Helper Methods =====

    fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advance if the peek token has the expected kind, otherwise record an
    /// error and leave the window untouched
    fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenKind) {
        let found = &self.peek_token;
        let error = if found.kind == TokenKind::Eof {
            MonkeyError::unexpected_eof(expected, found.location.clone())
        } else {
            MonkeyError::unexpected_token(
                expected,
                found.kind,
                found.literal.clone(),
                found.location.clone(),
            )
        };
        self.errors.push(error);
    }

    fn illegal_token_error(&mut self) {
        self.errors.push(MonkeyError::illegal_token(
            self.cur_token.literal.clone(),
            self.cur_token.location.clone(),
        ));
    }
}

//! Abstract Syntax Tree definitions
//!
//! This module defines the AST node types for the Monkey language. Statements
//! and expressions are separate closed enums, so a statement can never stand
//! where an expression is required.

use std::fmt;

use crate::lexer::Token;

/// Behaviour shared by every AST node
pub trait Node {
    /// Literal of the token the node was built from
    fn token_literal(&self) -> &str;
}

/// Root AST node representing a complete program
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Node for Program {
    fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Binding: let x = 5;
    Let(LetStatement),
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(stmt) => stmt.token_literal(),
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => write!(f, "{}", stmt),
        }
    }
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The `let` token
    pub token: Token,
    pub name: Identifier,
    /// Right-hand side; not parsed yet, always `None`
    pub value: Option<Expression>,
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for LetStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(ref value) = self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A name. Bound names in a `let` share this node with identifiers that
/// produce values elsewhere, so it is classified as an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The IDENT token
    pub token: Token,
    pub value: String,
}

impl Identifier {
    /// Build an identifier from its IDENT token
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

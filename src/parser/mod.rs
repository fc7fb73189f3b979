//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST).

pub mod ast;
pub mod parser;

pub use ast::{Expression, Identifier, LetStatement, Node, Program, Statement};
pub use parser::Parser;

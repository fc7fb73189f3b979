//! Lexer/Scanner implementation for the Monkey language
//!
//! A single-pass scanner with one character of lookahead. Tokens are pulled
//! one at a time with [`Lexer::next_token`]; once the input is exhausted
//! every further call yields an EOF token.

use super::token::{lookup_ident, Token, TokenKind};
use crate::error::SourceLocation;

/// Sentinel held in `ch` once the end of input is reached
const NUL: char = '\0';

/// Lexer for Monkey source code
pub struct Lexer {
    input: Vec<char>,
    /// Index of `ch`
    position: usize,
    /// Index of the character after `ch`
    read_position: usize,
    ch: char,
    line: usize,
    column: usize,
    filename: Option<String>,
    eof_emitted: bool,
}

impl Lexer {
    /// Create a new lexer, primed on the first character of `input`
    pub fn new(input: &str, filename: Option<&str>) -> Self {
        let mut lexer = Self {
            input: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: NUL,
            line: 1,
            column: 0,
            filename: filename.map(|s| s.to_string()),
            eof_emitted: false,
        };
        lexer.advance();
        lexer
    }

    /// Scan and return the next token
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let location = self.current_location();

        let token = match self.ch {
            '=' => {
                if self.peek() == '=' {
                    self.advance();
                    Token::new(TokenKind::Eq, "==", location)
                } else {
                    Token::new(TokenKind::Assign, "=", location)
                }
            }
            '!' => {
                if self.peek() == '=' {
                    self.advance();
                    Token::new(TokenKind::NotEq, "!=", location)
                } else {
                    Token::new(TokenKind::Bang, "!", location)
                }
            }
            '-' => self.single(TokenKind::Minus, location),
            '*' => self.single(TokenKind::Asterisk, location),
            '/' => self.single(TokenKind::Slash, location),
            '<' => self.single(TokenKind::Lt, location),
            '>' => self.single(TokenKind::Gt, location),
            ';' => self.single(TokenKind::Semicolon, location),
            '(' => self.single(TokenKind::LParen, location),
            ')' => self.single(TokenKind::RParen, location),
            ',' => self.single(TokenKind::Comma, location),
            '+' => self.single(TokenKind::Plus, location),
            '{' => self.single(TokenKind::LBrace, location),
            '}' => self.single(TokenKind::RBrace, location),
            NUL if self.is_at_end() => Token::new(TokenKind::Eof, "", location),

            // Identifier and number scans already sit past their lexeme
            c if is_letter(c) => {
                let literal = self.read_identifier();
                return Token::new(lookup_ident(&literal), literal, location);
            }
            c if c.is_ascii_digit() => {
                let literal = self.read_number();
                return Token::new(TokenKind::Int, literal, location);
            }

            c => Token::new(TokenKind::Illegal, c.to_string(), location),
        };

        self.advance();
        token
    }

    /// Scan every remaining token, up to and including the first EOF
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.by_ref().collect()
    }

    fn single(&self, kind: TokenKind, location: SourceLocation) -> Token {
        Token::new(kind, self.ch.to_string(), location)
    }

    /// Move `ch` to the next character, or to NUL past the end
    fn advance(&mut self) {
        if self.read_position <= self.input.len() {
            if self.ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.ch = self.input.get(self.read_position).copied().unwrap_or(NUL);
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Look at the character after `ch` without consuming it
    fn peek(&self) -> char {
        self.input.get(self.read_position).copied().unwrap_or(NUL)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, ' ' | '\t' | '\n' | '\r') {
            self.advance();
        }
    }

    fn read_identifier(&mut self) -> String {
        let start = self.position;
        while is_letter(self.ch) || self.ch.is_ascii_digit() {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    fn read_number(&mut self) -> String {
        let start = self.position;
        while self.ch.is_ascii_digit() {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.filename.clone())
    }
}

/// Yields tokens up to and including the first EOF, then stops
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.eof_emitted {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            self.eof_emitted = true;
        }
        Some(token)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds_and_literals(source: &str) -> Vec<(TokenKind, String)> {
        Lexer::new(source, None)
            .tokenize()
            .into_iter()
            .map(|t| (t.kind, t.literal))
            .collect()
    }

    fn single_token(source: &str) -> (TokenKind, String) {
        let tokens = kinds_and_literals(source);
        assert_eq!(tokens.len(), 2, "expected one token plus EOF for {:?}", source);
        assert_eq!(tokens[1].0, TokenKind::Eof);
        tokens[0].clone()
    }

    #[test]
    fn test_priming_reads_first_character() {
        let lexer = Lexer::new("let", None);
        assert_eq!(lexer.ch, 'l');
        assert_eq!(lexer.position, 0);
        assert_eq!(lexer.read_position, 1);

        let empty = Lexer::new("", None);
        assert_eq!(empty.ch, NUL);
        assert_eq!(empty.read_position, 1);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let lexer = Lexer::new("=!", None);
        assert_eq!(lexer.peek(), '!');
        assert_eq!(lexer.peek(), '!');
        assert_eq!(lexer.ch, '=');
        assert_eq!(lexer.read_position, 1);
    }

    #[test]
    fn test_single_character_tokens() {
        let cases = [
            ("=", TokenKind::Assign),
            ("!", TokenKind::Bang),
            ("-", TokenKind::Minus),
            ("*", TokenKind::Asterisk),
            ("/", TokenKind::Slash),
            ("<", TokenKind::Lt),
            (">", TokenKind::Gt),
            (";", TokenKind::Semicolon),
            ("(", TokenKind::LParen),
            (")", TokenKind::RParen),
            (",", TokenKind::Comma),
            ("+", TokenKind::Plus),
            ("{", TokenKind::LBrace),
            ("}", TokenKind::RBrace),
        ];

        for (source, kind) in cases {
            assert_eq!(single_token(source), (kind, source.to_string()));
        }
    }

    #[test]
    fn test_two_character_tokens() {
        assert_eq!(single_token("=="), (TokenKind::Eq, "==".to_string()));
        assert_eq!(single_token("!="), (TokenKind::NotEq, "!=".to_string()));
    }

    #[test]
    fn test_two_character_disambiguation() {
        assert_eq!(
            kinds_and_literals("= = ! ="),
            vec![
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Bang, "!".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
        assert_eq!(
            kinds_and_literals("!x==="),
            vec![
                (TokenKind::Bang, "!".to_string()),
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Eq, "==".to_string()),
                (TokenKind::Assign, "=".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_keywords() {
        let tokens = kinds_and_literals("fn let true false if else return");
        let kinds: Vec<TokenKind> = tokens.iter().map(|(k, _)| *k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Function,
                TokenKind::Let,
                TokenKind::True,
                TokenKind::False,
                TokenKind::If,
                TokenKind::Else,
                TokenKind::Return,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_versus_identifier() {
        assert_eq!(single_token("let"), (TokenKind::Let, "let".to_string()));
        assert_eq!(single_token("letx"), (TokenKind::Ident, "letx".to_string()));
        assert_eq!(single_token("x"), (TokenKind::Ident, "x".to_string()));
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(single_token("foobar123"), (TokenKind::Ident, "foobar123".to_string()));
        assert_eq!(single_token("_private_1"), (TokenKind::Ident, "_private_1".to_string()));
        assert_eq!(single_token("12345"), (TokenKind::Int, "12345".to_string()));
    }

    #[test]
    fn test_number_then_identifier() {
        assert_eq!(
            kinds_and_literals("5five"),
            vec![
                (TokenKind::Int, "5".to_string()),
                (TokenKind::Ident, "five".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_illegal_characters() {
        assert_eq!(
            kinds_and_literals("@x#"),
            vec![
                (TokenKind::Illegal, "@".to_string()),
                (TokenKind::Ident, "x".to_string()),
                (TokenKind::Illegal, "#".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
        assert_eq!(single_token("é"), (TokenKind::Illegal, "é".to_string()));
    }

    #[test]
    fn test_embedded_nul_is_illegal() {
        assert_eq!(
            kinds_and_literals("a\0b"),
            vec![
                (TokenKind::Ident, "a".to_string()),
                (TokenKind::Illegal, "\0".to_string()),
                (TokenKind::Ident, "b".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn test_eof_is_idempotent() {
        let mut lexer = Lexer::new("x", None);
        assert_eq!(lexer.next_token().kind, TokenKind::Ident);

        let first_eof = lexer.next_token();
        assert_eq!(first_eof.kind, TokenKind::Eof);
        assert_eq!(first_eof.literal, "");

        for _ in 0..10 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.literal, "");
            assert_eq!(token.location, first_eof.location);
        }
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds_and_literals(""), vec![(TokenKind::Eof, String::new())]);
        assert_eq!(kinds_and_literals(" \t\r\n"), vec![(TokenKind::Eof, String::new())]);
    }

    #[test]
    fn test_iterator_stops_after_eof() {
        let mut lexer = Lexer::new("let", None);
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Let));
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert!(lexer.next().is_none());
        // The pull interface keeps answering EOF
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }

    #[test]
    fn test_complete_program() {
        let source = "let five = 5;\nlet add = fn(x, y) {\n  x + y;\n};\nif (5 < 10) { return true; } else { return false; }\n10 == 10; 10 != 9;";
        let kinds: Vec<TokenKind> = Lexer::new(source, None).map(|t| t.kind).collect();

        use TokenKind::*;
        assert_eq!(
            kinds,
            vec![
                Let, Ident, Assign, Int, Semicolon,
                Let, Ident, Assign, Function, LParen, Ident, Comma, Ident, RParen, LBrace,
                Ident, Plus, Ident, Semicolon,
                RBrace, Semicolon,
                If, LParen, Int, Lt, Int, RParen, LBrace, Return, True, Semicolon, RBrace,
                Else, LBrace, Return, False, Semicolon, RBrace,
                Int, Eq, Int, Semicolon, Int, NotEq, Int, Semicolon,
                Eof,
            ]
        );
    }

    #[test]
    fn test_source_location() {
        let tokens = Lexer::new("let x\n  = 5;", Some("main.mk")).tokenize();

        let positions: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.location.line, t.location.column))
            .collect();
        assert_eq!(positions, vec![(1, 1), (1, 5), (2, 3), (2, 5), (2, 6), (2, 7)]);
        assert_eq!(tokens[0].location.filename.as_deref(), Some("main.mk"));
    }

    #[test]
    fn test_two_character_token_location() {
        let tokens = Lexer::new("a != b", None).tokenize();
        assert_eq!(tokens[1].kind, TokenKind::NotEq);
        assert_eq!(tokens[1].location, SourceLocation::at(1, 3));
        assert_eq!(tokens[2].location, SourceLocation::at(1, 6));
    }
}

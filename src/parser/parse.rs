//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser keeps a two-token window (current and peek) over a [`Lexer`]
//! and is organized as:
//! - This module: Parser struct, diagnostics, token helpers, `parse_program`
//! - `statements`: `let`, `return` and expression statements
//! - `expressions`: Pratt parsing with a precedence table and prefix/infix rules
//!
//! # Error Handling
//!
//! Parsing never stops at the first problem. Each failure is recorded as a
//! [`ParseError`] and the parser carries on with the next statement, so one
//! pass reports as many diagnostics as possible. A non-empty
//! [`Parser::errors`] means the returned [`Program`] should not be trusted.

use crate::parser::ast::*;
use crate::parser::expressions::ParseRules;
use crate::parser::lexer::Lexer;
use crate::parser::token::{SourceLocation, Token, TokenKind};
use std::fmt;

/// What went wrong, without the location
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token kind was not next in the stream
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    /// The token cannot start an expression
    NoPrefixRule(TokenKind),
    /// An integer literal that does not fit in an `i64`
    InvalidInteger(String),
    /// Expression tree deeper than the given limit
    NestingTooDeep(usize),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            ParseErrorKind::NoPrefixRule(kind) => {
                write!(f, "no prefix parse function for {} found", kind)
            }
            ParseErrorKind::InvalidInteger(text) => {
                write!(f, "could not parse {:?} as integer", text)
            }
            ParseErrorKind::NestingTooDeep(limit) => {
                write!(f, "expression nesting is too deep (maximum {} levels)", limit)
            }
        }
    }
}

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub location: SourceLocation,
}

impl ParseError {
    /// The diagnostic text without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Parse error at line {}, column {}: {}",
            self.location.line, self.location.column, self.kind
        )
    }
}

impl std::error::Error for ParseError {}

/// Parser configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Parse the right-hand side of `let` and `return` as an expression.
    ///
    /// When `false` (the default) the tokens after `=` / `return` are
    /// skipped up to the terminating `;` and the value is left empty.
    pub parse_statement_values: bool,
}

/// Pratt parser for Monkey programs
pub struct Parser {
    pub(crate) lexer: Lexer,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    pub(crate) errors: Vec<ParseError>,
    pub(crate) rules: ParseRules,
    pub(crate) options: ParserOptions,
    pub(crate) depth: usize, // Expression levels entered so far
    pub(crate) abandoned: bool, // Rest of the current statement was skipped
}

impl Parser {
    pub fn new(lexer: Lexer) -> Self {
        Self::with_options(lexer, ParserOptions::default())
    }

    pub fn with_options(mut lexer: Lexer, options: ParserOptions) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            current,
            peek,
            errors: Vec::new(),
            rules: ParseRules::default(),
            options,
            depth: 0,
            abandoned: false,
        }
    }

    /// Convenience constructor that builds the lexer too.
    pub fn from_source(source: &str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse the whole token stream. Always returns a program; check
    /// [`Parser::errors`] before trusting it.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        program
    }

    /// Diagnostics collected so far, in the order they were found.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ParseError::message).collect()
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advance onto the peek token if it has the expected kind, otherwise
    /// record an error and stay put.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_is(kind) {
            self.next_token();
            true
        } else {
            self.peek_error(kind);
            false
        }
    }

    pub(crate) fn peek_error(&mut self, expected: TokenKind) {
        let location = self.peek.location;
        self.error(
            ParseErrorKind::UnexpectedToken {
                expected,
                found: self.peek.kind,
            },
            location,
        );
    }

    pub(crate) fn error(&mut self, kind: ParseErrorKind, location: SourceLocation) {
        self.errors.push(ParseError { kind, location });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_primes_two_tokens() {
        let parser = Parser::from_source("let x");

        assert!(parser.current_is(TokenKind::Let));
        assert!(parser.peek_is(TokenKind::Ident));
        assert!(parser.errors().is_empty());
    }

    #[test]
    fn test_expect_peek_records_error() {
        let mut parser = Parser::from_source("let 5");

        assert!(!parser.expect_peek(TokenKind::Ident));
        assert!(parser.current_is(TokenKind::Let));
        assert_eq!(
            parser.errors()[0].kind,
            ParseErrorKind::UnexpectedToken {
                expected: TokenKind::Ident,
                found: TokenKind::Int,
            }
        );
        assert_eq!(parser.errors()[0].location, SourceLocation::new(1, 5));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError {
            kind: ParseErrorKind::NoPrefixRule(TokenKind::Illegal),
            location: SourceLocation::new(2, 7),
        };

        assert_eq!(err.message(), "no prefix parse function for ILLEGAL found");
        assert_eq!(
            err.to_string(),
            "Parse error at line 2, column 7: no prefix parse function for ILLEGAL found"
        );
    }

    #[test]
    fn test_nesting_error_display() {
        let kind = ParseErrorKind::NestingTooDeep(256);
        assert_eq!(
            kind.to_string(),
            "expression nesting is too deep (maximum 256 levels)"
        );
    }

    #[test]
    fn test_empty_source() {
        let mut parser = Parser::from_source("");
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert!(parser.errors().is_empty());
    }
}

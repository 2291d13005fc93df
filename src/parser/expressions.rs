//! Expression parsing implementation
//!
//! This module handles parsing of Monkey expressions with a Pratt parser:
//! each token kind may own a *prefix* rule (how an expression starting with
//! that token is parsed) and an *infix* rule (how an already parsed left-hand
//! side is extended when that token follows it).
//!
//! # Supported Expressions
//!
//! - Identifiers and integer literals
//! - Grouping: `( <expr> )`
//! - Prefix operators: `!`, `-`
//! - Binary operators: `+ - * / < > == !=`
//!
//! # Precedence
//!
//! [`Precedence::of`] is the single source of truth for binding power. The
//! loop in [`Parser::parse_expression`] keeps folding while the next operator
//! binds tighter than the caller's bound, and re-enters with the same bound
//! after each fold, so operators of equal precedence associate to the left.

use crate::parser::ast::*;
use crate::parser::parse::{ParseErrorKind, Parser};
use crate::parser::token::{SourceLocation, TokenKind};
use rustc_hash::FxHashMap;

/// Binding power, lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // reserved
}

impl Precedence {
    /// Precedence of a token in infix position. Kinds that are not binary
    /// operators bind at `Lowest`, which ends any expression loop.
    pub fn of(kind: TokenKind) -> Precedence {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Precedence::Product,
            _ => Precedence::Lowest,
        }
    }
}

/// How to start an expression at a given token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixRule {
    Identifier,
    IntegerLiteral,
    Operator,
    Grouped,
}

/// How to extend a left-hand side with the operator at a given token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixRule {
    Binary,
}

/// Per-kind dispatch tables. Each kind has at most one rule per table.
#[derive(Debug, Clone)]
pub struct ParseRules {
    prefix: FxHashMap<TokenKind, PrefixRule>,
    infix: FxHashMap<TokenKind, InfixRule>,
}

impl ParseRules {
    pub fn new() -> Self {
        let mut rules = ParseRules {
            prefix: FxHashMap::default(),
            infix: FxHashMap::default(),
        };

        rules.register_prefix(TokenKind::Ident, PrefixRule::Identifier);
        rules.register_prefix(TokenKind::Int, PrefixRule::IntegerLiteral);
        rules.register_prefix(TokenKind::Bang, PrefixRule::Operator);
        rules.register_prefix(TokenKind::Minus, PrefixRule::Operator);
        rules.register_prefix(TokenKind::LParen, PrefixRule::Grouped);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::Eq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
        ] {
            rules.register_infix(kind, InfixRule::Binary);
        }

        rules
    }

    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixRule) {
        self.prefix.insert(kind, rule);
    }

    fn register_infix(&mut self, kind: TokenKind, rule: InfixRule) {
        self.infix.insert(kind, rule);
    }

    pub fn prefix(&self, kind: TokenKind) -> Option<PrefixRule> {
        self.prefix.get(&kind).copied()
    }

    pub fn infix(&self, kind: TokenKind) -> Option<InfixRule> {
        self.infix.get(&kind).copied()
    }
}

impl Default for ParseRules {
    fn default() -> Self {
        Self::new()
    }
}

/// Tallest expression tree the parser builds. Deeper input is reported as a
/// diagnostic and the rest of the statement is skipped.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A parsed expression, if any, and the height of its tree
type Subtree = (Option<Expression>, usize);

impl Parser {
    /// Parse an expression whose operators all bind tighter than `precedence`.
    ///
    /// Entered with the first token of the expression as the current token;
    /// returns with the last consumed token as the current token.
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        self.parse_subtree(precedence).0
    }

    /// The Pratt loop. The returned tree is at most
    /// `MAX_NESTING_DEPTH - self.depth` levels tall.
    fn parse_subtree(&mut self, precedence: Precedence) -> Subtree {
        let Some(prefix) = self.rules.prefix(self.current.kind) else {
            let location = self.current.location;
            self.error(ParseErrorKind::NoPrefixRule(self.current.kind), location);
            return (None, 0);
        };

        if !self.enter_nesting() {
            return (None, 0);
        }

        // A failed prefix rule still lets the operators after it fold, with
        // an empty left operand.
        let (mut left, mut height) = self.parse_prefix(prefix);

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.rules.infix(self.peek.kind) else {
                break;
            };
            if self.depth + height > MAX_NESTING_DEPTH {
                let location = self.peek.location;
                self.nesting_too_deep(location);
                break;
            }
            self.next_token();
            (left, height) = self.parse_infix(infix, left, height);
        }

        self.leave_nesting();
        (left, height)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    // ===== Nesting limit =====

    fn enter_nesting(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            let location = self.current.location;
            self.nesting_too_deep(location);
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave_nesting(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Report the limit once, then drop the rest of the statement so every
    /// enclosing loop and group unwinds without further diagnostics.
    fn nesting_too_deep(&mut self, location: SourceLocation) {
        self.error(ParseErrorKind::NestingTooDeep(MAX_NESTING_DEPTH), location);
        self.abandoned = true;
        while !self.peek_is(TokenKind::Semicolon) && !self.peek_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    // ===== Rules =====

    fn parse_prefix(&mut self, rule: PrefixRule) -> Subtree {
        match rule {
            PrefixRule::Identifier => (
                Some(Expression::Identifier(Identifier::new(self.current.clone()))),
                1,
            ),
            PrefixRule::IntegerLiteral => match self.parse_integer_literal() {
                Some(lit) => (Some(lit), 1),
                None => (None, 0),
            },
            PrefixRule::Operator => self.parse_prefix_expression(),
            PrefixRule::Grouped => self.parse_grouped_expression(),
        }
    }

    fn parse_infix(&mut self, rule: InfixRule, left: Option<Expression>, height: usize) -> Subtree {
        match rule {
            InfixRule::Binary => self.parse_infix_expression(left, height),
        }
    }

    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        match parse_int_literal(&token.literal) {
            Some(value) => Some(Expression::IntegerLiteral(IntegerLiteral { token, value })),
            None => {
                self.error(
                    ParseErrorKind::InvalidInteger(token.literal.clone()),
                    token.location,
                );
                None
            }
        }
    }

    /// `!x` / `-x`; the operand binds at prefix precedence.
    fn parse_prefix_expression(&mut self) -> Subtree {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.next_token();
        let (right, right_height) = self.parse_subtree(Precedence::Prefix);

        let expr = Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: right.map(Box::new),
        });
        (Some(expr), right_height + 1)
    }

    /// `( <expr> )` resets the bound to `Lowest`. The parentheses leave no
    /// node behind.
    fn parse_grouped_expression(&mut self) -> Subtree {
        self.next_token();
        let inner = self.parse_subtree(Precedence::Lowest);

        if self.abandoned {
            return inner;
        }
        if !self.expect_peek(TokenKind::RParen) {
            return (None, 0);
        }
        inner
    }

    /// Shared by every binary operator; the right operand binds at the
    /// operator's own precedence.
    fn parse_infix_expression(&mut self, left: Option<Expression>, left_height: usize) -> Subtree {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.next_token();
        let (right, right_height) = self.parse_subtree(precedence);

        let expr = Expression::Infix(InfixExpression {
            token,
            left: left.map(Box::new),
            operator,
            right: right.map(Box::new),
        });
        (Some(expr), left_height.max(right_height) + 1)
    }
}

/// Convert integer literal text to an `i64`.
///
/// A leading `0` followed by more digits selects octal, as in C; everything
/// else is decimal. Returns `None` on overflow or digits outside the radix.
fn parse_int_literal(text: &str) -> Option<i64> {
    match text.strip_prefix('0') {
        Some(octal) if !octal.is_empty() => i64::from_str_radix(octal, 8).ok(),
        _ => text.parse::<i64>().ok(),
    }
}

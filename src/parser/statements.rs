//! Statement parsing implementation
//!
//! Dispatch is purely on the current token's kind:
//! - `let` → [`LetStatement`]
//! - `return` → [`ReturnStatement`]
//! - anything else → [`ExpressionStatement`]
//!
//! Each method leaves the parser on the last token of its statement;
//! [`Parser::parse_program`] then steps past it. A statement that returns
//! `None` contributes nothing to the program but parsing still moves on.

use crate::parser::ast::*;
use crate::parser::expressions::Precedence;
use crate::parser::parse::Parser;
use crate::parser::token::TokenKind;

impl Parser {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        self.abandoned = false;
        match self.current.kind {
            TokenKind::Let => self.parse_let_statement().map(Statement::Let),
            TokenKind::Return => self.parse_return_statement().map(Statement::Return),
            _ => Some(Statement::Expression(self.parse_expression_statement())),
        }
    }

    /// Parse `let <ident> = <value>;`
    fn parse_let_statement(&mut self) -> Option<LetStatement> {
        let token = self.current.clone();

        if !self.expect_peek(TokenKind::Ident) {
            return None;
        }
        let name = Identifier::new(self.current.clone());

        if !self.expect_peek(TokenKind::Assign) {
            return None;
        }

        let value = self.parse_statement_value();

        Some(LetStatement { token, name, value })
    }

    /// Parse `return <value>;`
    fn parse_return_statement(&mut self) -> Option<ReturnStatement> {
        let token = self.current.clone();
        let return_value = self.parse_statement_value();

        Some(ReturnStatement {
            token,
            return_value,
        })
    }

    /// Body of `let`/`return`, entered with the parser on `=` or `return`.
    fn parse_statement_value(&mut self) -> Option<Expression> {
        self.next_token();

        if self.options.parse_statement_values {
            let value = self.parse_expression(Precedence::Lowest);
            if self.peek_is(TokenKind::Semicolon) {
                self.next_token();
            }
            return value;
        }

        self.skip_to_semicolon();
        None
    }

    /// Advance until the current token is `;` or `Eof`.
    fn skip_to_semicolon(&mut self) {
        while !self.current_is(TokenKind::Semicolon) && !self.current_is(TokenKind::Eof) {
            self.next_token();
        }
    }

    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }

        ExpressionStatement { token, expression }
    }
}

// AST (Abstract Syntax Tree) definitions for Monkey programs
//
// Every node keeps the token it was built from. `Display` reproduces the
// source in fully parenthesized form, e.g. `((a + b) * c)`.

use super::token::{SourceLocation, Token};
use std::fmt;

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>, // In parse order
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
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

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    pub fn token(&self) -> &Token {
        match self {
            Statement::Let(stmt) => &stmt.token,
            Statement::Return(stmt) => &stmt.token,
            Statement::Expression(stmt) => &stmt.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn location(&self) -> SourceLocation {
        self.token().location
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let(stmt) => {
                write!(f, "{} {} = ", stmt.token.literal, stmt.name)?;
                if let Some(value) = &stmt.value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Return(stmt) => {
                write!(f, "{} ", stmt.token.literal)?;
                if let Some(value) = &stmt.return_value {
                    write!(f, "{}", value)?;
                }
                write!(f, ";")
            }
            Statement::Expression(stmt) => match &stmt.expression {
                Some(expr) => write!(f, "{}", expr),
                None => Ok(()),
            },
        }
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    pub token: Token,
    pub name: Identifier,
    /// Empty when the body was skipped or failed to parse
    pub value: Option<Expression>,
}

/// `return <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub return_value: Option<Expression>,
}

/// A bare expression used as a statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token, // First token of the expression
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    IntegerLiteral(IntegerLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(ident) => &ident.token,
            Expression::IntegerLiteral(lit) => &lit.token,
            Expression::Prefix(expr) => &expr.token,
            Expression::Infix(expr) => &expr.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier(ident) => write!(f, "{}", ident),
            Expression::IntegerLiteral(lit) => write!(f, "{}", lit.token.literal),
            Expression::Prefix(expr) => {
                write!(f, "({}", expr.operator)?;
                if let Some(right) = &expr.right {
                    write!(f, "{}", right)?;
                }
                write!(f, ")")
            }
            Expression::Infix(expr) => {
                write!(f, "(")?;
                if let Some(left) = &expr.left {
                    write!(f, "{}", left)?;
                }
                write!(f, " {} ", expr.operator)?;
                if let Some(right) = &expr.right {
                    write!(f, "{}", right)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A name reference. `value` is the same text as the token literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
}

impl Identifier {
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
}

/// `<op><right>` for `!` and `-`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

/// `<left> <op> <right>`
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpression {
    pub token: Token,
    /// Empty when the left operand failed to parse
    pub left: Option<Box<Expression>>,
    pub operator: String,
    pub right: Option<Box<Expression>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn tok(kind: TokenKind, literal: &str) -> Token {
        Token::new(kind, literal, SourceLocation::default())
    }

    fn ident(name: &str) -> Expression {
        Expression::Identifier(Identifier::new(tok(TokenKind::Ident, name)))
    }

    #[test]
    fn test_let_statement_string() {
        let program = Program {
            statements: vec![Statement::Let(LetStatement {
                token: tok(TokenKind::Let, "let"),
                name: Identifier::new(tok(TokenKind::Ident, "myVar")),
                value: Some(ident("anotherVar")),
            })],
        };

        assert_eq!(program.to_string(), "let myVar = anotherVar;");
        assert_eq!(program.token_literal(), "let");
    }

    #[test]
    fn test_statements_with_empty_values() {
        let program = Program {
            statements: vec![
                Statement::Let(LetStatement {
                    token: tok(TokenKind::Let, "let"),
                    name: Identifier::new(tok(TokenKind::Ident, "x")),
                    value: None,
                }),
                Statement::Return(ReturnStatement {
                    token: tok(TokenKind::Return, "return"),
                    return_value: None,
                }),
            ],
        };

        assert_eq!(program.to_string(), "let x = ;return ;");
    }

    #[test]
    fn test_nested_expression_string() {
        let neg = Expression::Prefix(PrefixExpression {
            token: tok(TokenKind::Minus, "-"),
            operator: "-".to_string(),
            right: Some(Box::new(ident("a"))),
        });
        let product = Expression::Infix(InfixExpression {
            token: tok(TokenKind::Asterisk, "*"),
            left: Some(Box::new(neg)),
            operator: "*".to_string(),
            right: Some(Box::new(ident("b"))),
        });

        assert_eq!(product.to_string(), "((-a) * b)");
        assert_eq!(product.token_literal(), "*");
    }

    #[test]
    fn test_infix_with_empty_operands() {
        let expr = Expression::Infix(InfixExpression {
            token: tok(TokenKind::Plus, "+"),
            left: None,
            operator: "+".to_string(),
            right: Some(Box::new(ident("x"))),
        });

        assert_eq!(expr.to_string(), "( + x)");
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert_eq!(program.token_literal(), "");
        assert_eq!(program.to_string(), "");
    }
}

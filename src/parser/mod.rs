//! Monkey source code parser
//!
//! This module transforms Monkey source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token kinds, tokens and source locations
//! - [`lexer`]: Tokenization (source text → tokens, pulled one at a time)
//! - [`parse`]: Parser state, diagnostics and the program entry point
//! - [`statements`] / [`expressions`]: the grammar, split by construct
//! - [`ast`]: AST node definitions and their source reconstruction
//!
//! # Supported Language Subset
//!
//! - Statements: `let <name> = <expr>;`, `return <expr>;`, expression statements
//! - Expressions: identifiers, integers, prefix `!`/`-`, binary `+ - * / < > == !=`
//! - No functions, conditionals, arrays, or strings yet
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser: a precedence table plus per-token-kind prefix
//! and infix rules. No external parser generator dependencies.

pub mod ast;
pub mod expressions;
pub mod lexer;
pub mod parse;
pub mod statements;
pub mod token;

pub use ast::Program;
pub use lexer::Lexer;
pub use parse::{ParseError, ParseErrorKind, Parser, ParserOptions};
pub use token::{SourceLocation, Token, TokenKind};

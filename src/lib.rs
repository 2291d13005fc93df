//! # Introduction
//!
//! A front end for the Monkey scripting language: a hand-written lexer and a
//! Pratt (operator-precedence) parser that turn source text into an AST,
//! plus a REPL and a terminal explorer built on
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST (+ diagnostics)
//! ```
//!
//! 1. [`parser`] — tokens, lexer, AST, and the parser itself.
//! 2. [`repl`] — line-by-line loop printing tokens and the parsed program.
//! 3. [`ui`] — ratatui-based explorer for one file; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! use monkey::parser::Parser;
//!
//! let mut parser = Parser::from_source("a + b * c");
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "(a + (b * c))");
//! ```

pub mod parser;
pub mod repl;
pub mod ui;

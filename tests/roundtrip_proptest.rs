//! Property-based tests for the parser.
//!
//! 1. **Print/parse round trip** — rendering a parsed expression and parsing
//!    the rendering gives back the same tree (ignoring source locations)
//! 2. **Rendering is a fixed point** — rendering the reparsed tree gives the
//!    same text again
//! 3. **Parser never panics** — arbitrary input always yields a program, and
//!    every diagnostic points inside the input. This includes input nested
//!    far past the parser's depth limit.
//! 4. **Failed operands stay in place** — an out-of-range integer on the left
//!    of an operator costs one diagnostic and still folds into one statement

use monkey::parser::ast::*;
use monkey::parser::expressions::MAX_NESTING_DEPTH;
use monkey::parser::{ParseErrorKind, Parser, SourceLocation, Token};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,5}".prop_filter("keywords are not identifiers", |s| {
        s != "let" && s != "return"
    })
}

fn integer() -> impl Strategy<Value = String> {
    (0..=i64::MAX).prop_map(|n| n.to_string())
}

/// Source text for expressions built from identifiers, integers, grouping,
/// `!`/`-` and the binary operators.
fn expression_source() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![identifier(), integer()];

    leaf.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            (prop::sample::select(vec!["!", "-"]), inner.clone())
                .prop_map(|(op, operand)| format!("{}{}", op, operand)),
            (
                inner.clone(),
                prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="]),
                inner.clone(),
            )
                .prop_map(|(left, op, right)| format!("{} {} {}", left, op, right)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn at_origin(token: &Token) -> Token {
    Token::new(token.kind, token.literal.clone(), SourceLocation::default())
}

/// Copy of `expr` with every location reset, for structural comparison.
fn erase_locations(expr: &Expression) -> Expression {
    match expr {
        Expression::Identifier(ident) => Expression::Identifier(Identifier {
            token: at_origin(&ident.token),
            value: ident.value.clone(),
        }),
        Expression::IntegerLiteral(lit) => Expression::IntegerLiteral(IntegerLiteral {
            token: at_origin(&lit.token),
            value: lit.value,
        }),
        Expression::Prefix(prefix) => Expression::Prefix(PrefixExpression {
            token: at_origin(&prefix.token),
            operator: prefix.operator.clone(),
            right: prefix
                .right
                .as_deref()
                .map(|right| Box::new(erase_locations(right))),
        }),
        Expression::Infix(infix) => Expression::Infix(InfixExpression {
            token: at_origin(&infix.token),
            left: infix
                .left
                .as_deref()
                .map(|left| Box::new(erase_locations(left))),
            operator: infix.operator.clone(),
            right: infix
                .right
                .as_deref()
                .map(|right| Box::new(erase_locations(right))),
        }),
    }
}

fn parse_single_expression(source: &str) -> Result<Expression, TestCaseError> {
    let mut parser = Parser::from_source(source);
    let program = parser.parse_program();

    prop_assert!(
        parser.errors().is_empty(),
        "errors for {:?}: {:?}",
        source,
        parser.error_messages()
    );
    prop_assert_eq!(program.statements.len(), 1);

    match program.statements.into_iter().next() {
        Some(Statement::Expression(ExpressionStatement {
            expression: Some(expr),
            ..
        })) => Ok(expr),
        other => Err(TestCaseError::fail(format!(
            "expected one expression statement for {:?}, got {:?}",
            source, other
        ))),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn rendered_expression_parses_to_same_tree(source in expression_source()) {
        let first = parse_single_expression(&source)?;
        let rendered = first.to_string();

        let second = parse_single_expression(&rendered)?;

        prop_assert_eq!(erase_locations(&first), erase_locations(&second));
        prop_assert_eq!(second.to_string(), rendered);
    }

    #[test]
    fn parser_never_panics(source in "\\PC{0,64}") {
        let mut parser = Parser::from_source(&source);
        let _program = parser.parse_program();

        let line_count = source.split('\n').count();
        for err in parser.errors() {
            prop_assert!(err.location.line >= 1 && err.location.line <= line_count);
            prop_assert!(err.location.column >= 1);
        }
    }

    #[test]
    fn deep_nesting_reports_instead_of_overflowing(
        opener in prop::sample::select(vec!["-", "!", "(", "a + ", "1 * ", "-(", "b == "]),
        levels in 1usize..6_000,
    ) {
        let source = format!("{}z", opener.repeat(levels));
        let mut parser = Parser::from_source(&source);
        let program = parser.parse_program();

        prop_assert_eq!(program.statements.len(), 1);
        for err in parser.errors() {
            prop_assert!(
                matches!(
                    err.kind,
                    ParseErrorKind::NestingTooDeep(MAX_NESTING_DEPTH)
                        | ParseErrorKind::UnexpectedToken { .. }
                ),
                "unexpected diagnostic {:?}",
                err
            );
        }
        if levels > 2 * MAX_NESTING_DEPTH {
            prop_assert!(parser
                .errors()
                .iter()
                .any(|err| matches!(err.kind, ParseErrorKind::NestingTooDeep(_))));
        }
        let _rendered = program.to_string();
    }

    #[test]
    fn out_of_range_left_operand_still_folds(
        digits in 20usize..40,
        op in prop::sample::select(vec!["+", "-", "*", "/", "<", ">", "==", "!="]),
        right in expression_source(),
    ) {
        let big = "9".repeat(digits);
        let source = format!("{} {} {};", big, op, right);
        let mut parser = Parser::from_source(&source);
        let program = parser.parse_program();

        prop_assert_eq!(
            parser.errors().iter().map(|e| e.kind.clone()).collect::<Vec<_>>(),
            vec![ParseErrorKind::InvalidInteger(big)]
        );
        prop_assert_eq!(program.statements.len(), 1);
        match &program.statements[0] {
            Statement::Expression(ExpressionStatement {
                expression: Some(Expression::Infix(_)),
                ..
            }) => {}
            other => prop_assert!(false, "expected infix expression, got {:?}", other),
        }
    }

    #[test]
    fn let_lines_yield_one_statement_each(
        names in prop::collection::vec(identifier(), 1..8),
        body in "[a-z0-9 +*/<>!=(),{}-]{0,16}",
    ) {
        let source: String = names
            .iter()
            .map(|name| format!("let {} = {};\n", name, body))
            .collect();

        let mut parser = Parser::from_source(&source);
        let program = parser.parse_program();

        prop_assert!(parser.errors().is_empty());
        prop_assert_eq!(program.statements.len(), names.len());
        for (stmt, name) in program.statements.iter().zip(&names) {
            match stmt {
                Statement::Let(let_stmt) => prop_assert_eq!(&let_stmt.name.value, name),
                other => prop_assert!(false, "expected let statement, got {:?}", other),
            }
        }
    }
}

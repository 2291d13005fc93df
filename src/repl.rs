//! Line-oriented read-lex-parse loop
//!
//! Each input line is shown twice: first as the raw token stream, then as the
//! reconstructed program (or the diagnostics when the line does not parse).

use crate::parser::{Lexer, Parser, ParserOptions, TokenKind};
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = ">> ";

/// Run the loop until `input` is exhausted.
pub fn start<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: ParserOptions,
) -> io::Result<()> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(());
        };
        let line = line?;

        print_tokens(&line, output)?;
        print_parse(&line, output, options)?;
    }
}

fn print_tokens<W: Write>(line: &str, output: &mut W) -> io::Result<()> {
    let mut lexer = Lexer::new(line);

    loop {
        let token = lexer.next_token();
        if token.is(TokenKind::Eof) {
            return Ok(());
        }
        writeln!(
            output,
            "{{Type:{} Literal:{:?}}}",
            token.kind, token.literal
        )?;
    }
}

fn print_parse<W: Write>(line: &str, output: &mut W, options: ParserOptions) -> io::Result<()> {
    let mut parser = Parser::with_options(Lexer::new(line), options);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        writeln!(output, "{}", program)
    } else {
        for err in parser.errors() {
            writeln!(output, "\t{}", err.message())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, options: ParserOptions) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output, options).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_tokens_and_program() {
        let output = run("-a * b\n", ParserOptions::default());

        assert!(output.starts_with(PROMPT));
        assert!(output.contains("{Type:- Literal:\"-\"}"));
        assert!(output.contains("{Type:IDENT Literal:\"b\"}"));
        assert!(output.contains("((-a) * b)\n"));
        assert!(!output.contains("EOF"));
    }

    #[test]
    fn test_prints_diagnostics() {
        let output = run("1 + @\n", ParserOptions::default());

        assert!(output.contains("{Type:ILLEGAL Literal:\"@\"}"));
        assert!(output.contains("\tno prefix parse function for ILLEGAL found\n"));
    }

    #[test]
    fn test_parse_values_option() {
        let options = ParserOptions {
            parse_statement_values: true,
        };
        let output = run("let x = 1 + 2;\n", options);

        assert!(output.contains("let x = (1 + 2);\n"));
    }

    #[test]
    fn test_stops_at_end_of_input() {
        let output = run("", ParserOptions::default());
        assert_eq!(output, format!("{}\n", PROMPT));
    }
}

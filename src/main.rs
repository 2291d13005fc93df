// Monkey: lexer, Pratt parser, REPL and parse explorer

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use monkey::parser::ParserOptions;
use monkey::repl;
use monkey::ui::{App, ParseView};

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [--parse-values] [--dump] [file.mk]", program_name);
    eprintln!();
    eprintln!("Without a file, starts the REPL on standard input.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --parse-values   parse the right-hand side of let/return");
    eprintln!("  --dump           print the parse instead of opening the explorer");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("monkey");

    let mut options = ParserOptions::default();
    let mut dump = false;
    let mut file = None;

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--parse-values" => options.parse_statement_values = true,
            "--dump" => dump = true,
            "-h" | "--help" => {
                print_usage(program_name);
                return Ok(());
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown option '{}'", flag);
                print_usage(program_name);
                std::process::exit(1);
            }
            path => file = Some(path.to_string()),
        }
    }

    let Some(file) = file else {
        let user = std::env::var("USER").unwrap_or_else(|_| String::from("there"));
        println!("Hello {}! This is the Monkey programming language!", user);
        println!("Feel free to type in commands");
        let stdin = io::stdin();
        repl::start(stdin.lock(), &mut io::stdout(), options)?;
        return Ok(());
    };

    if !Path::new(&file).exists() {
        eprintln!("Error: File '{}' not found", file);
        print_usage(program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&file)?;

    eprintln!("Parsing {}...", file);
    let view = ParseView::new(source, options);
    eprintln!(
        "Parsed {} statements with {} diagnostics.",
        view.program.statements.len(),
        view.errors.len()
    );

    if dump {
        println!("{}", view.program);
        for err in &view.errors {
            println!("{}", err);
        }
        if !view.errors.is_empty() {
            std::process::exit(1);
        }
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(view);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

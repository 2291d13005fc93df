//! Main TUI application state and logic

use crate::parser::ast::Program;
use crate::parser::{Lexer, ParseError, Parser, ParserOptions, SourceLocation, Token};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Everything the explorer shows about one source file
pub struct ParseView {
    pub source: String,
    pub tokens: Vec<Token>,
    pub program: Program,
    pub errors: Vec<ParseError>,
}

impl ParseView {
    /// Lex and parse `source`. The token list comes from a separate lexer
    /// pass since the parser consumes its own.
    pub fn new(source: String, options: ParserOptions) -> Self {
        let tokens = Lexer::new(&source).tokenize();
        let mut parser = Parser::with_options(Lexer::new(&source), options);
        let program = parser.parse_program();
        let errors = parser.errors().to_vec();

        ParseView {
            source,
            tokens,
            program,
            errors,
        }
    }

    /// Index of the token starting at `location`, or the last token before it.
    pub fn token_at(&self, location: SourceLocation) -> usize {
        let key = (location.line, location.column);
        self.tokens
            .iter()
            .rposition(|t| (t.location.line, t.location.column) <= key)
            .unwrap_or(0)
    }
}

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Ast,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: source -> tokens -> ast -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Ast,
            FocusedPane::Ast => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Ast => FocusedPane::Tokens,
            FocusedPane::Diagnostics => FocusedPane::Ast,
        }
    }
}

/// The main application state
pub struct App {
    pub view: ParseView,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Index into `view.tokens`; drives the source and AST highlights
    pub selected_token: usize,

    /// Index into `view.errors`
    pub selected_error: usize,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub tokens_scroll: usize,
    pub ast_scroll: usize,
    pub diagnostics_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    pub fn new(view: ParseView) -> Self {
        let status_message = if view.errors.is_empty() {
            String::from("Parsed cleanly")
        } else {
            String::from("Parsed with errors")
        };

        App {
            view,
            focused_pane: FocusedPane::Source,
            selected_token: 0,
            selected_error: 0,
            source_scroll: 0,
            tokens_scroll: 0,
            ast_scroll: 0,
            diagnostics_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn current_line(&self) -> usize {
        self.view
            .tokens
            .get(self.selected_token)
            .map(|t| t.location.line)
            .unwrap_or(1)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(main_chunks[0]);

        // Left column: Source (top) | AST (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        // Right column: Tokens (top) | Diagnostics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[1]);

        let current_line = self.current_line();

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            &self.view.source,
            current_line,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_ast_pane(
            frame,
            left_rows[1],
            &self.view.program,
            current_line,
            self.focused_pane == FocusedPane::Ast,
            &mut self.ast_scroll,
        );

        super::panes::render_tokens_pane(
            frame,
            right_rows[0],
            &self.view.tokens,
            self.selected_token,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            right_rows[1],
            &self.view.errors,
            self.selected_error,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected_token,
            self.view.tokens.len(),
            self.view.errors.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source | FocusedPane::Tokens => {
                    self.selected_token = self.selected_token.saturating_sub(1);
                }
                FocusedPane::Ast => {
                    self.ast_scroll = self.ast_scroll.saturating_sub(1);
                }
                FocusedPane::Diagnostics => {
                    self.selected_error = self.selected_error.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source | FocusedPane::Tokens => {
                    let last = self.view.tokens.len().saturating_sub(1);
                    self.selected_token = (self.selected_token + 1).min(last);
                }
                FocusedPane::Ast => {
                    self.ast_scroll = self.ast_scroll.saturating_add(1);
                }
                FocusedPane::Diagnostics => {
                    let last = self.view.errors.len().saturating_sub(1);
                    self.selected_error = (self.selected_error + 1).min(last);
                }
            },
            KeyCode::Enter => self.jump_to_selected_error(),
            _ => {}
        }
    }

    /// Move the token selection to where the selected diagnostic was reported
    fn jump_to_selected_error(&mut self) {
        match self.view.errors.get(self.selected_error) {
            Some(err) => {
                let location = err.location;
                self.selected_token = self.view.token_at(location);
                self.focused_pane = FocusedPane::Tokens;
                self.status_message = format!("Jumped to {}", location);
            }
            None => {
                self.status_message = String::from("No errors to jump to");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(source: &str) -> App {
        App::new(ParseView::new(source.to_string(), ParserOptions::default()))
    }

    #[test]
    fn test_parse_view_collects_everything() {
        let view = ParseView::new("let x = 5;\n1 + @".to_string(), ParserOptions::default());

        assert_eq!(view.tokens.len(), 9);
        assert_eq!(view.program.statements.len(), 2);
        assert_eq!(view.errors.len(), 1);
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = app("a");

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Diagnostics);
    }

    #[test]
    fn test_token_selection_is_clamped() {
        let mut app = app("a + b");

        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected_token, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected_token, 3); // a, +, b, EOF
    }

    #[test]
    fn test_jump_to_error() {
        let mut app = app("let x = 1;\nfoo @ bar");
        app.focused_pane = FocusedPane::Diagnostics;

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        assert_eq!(app.view.tokens[app.selected_token].literal, "@");
    }

    #[test]
    fn test_jump_without_errors() {
        let mut app = app("a");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.selected_token, 0);
        assert_eq!(app.status_message, "No errors to jump to");
    }

    #[test]
    fn test_quit() {
        let mut app = app("");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}

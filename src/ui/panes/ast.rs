//! AST pane rendering: one row per top-level statement

use crate::parser::ast::{Program, Statement};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn statement_label(stmt: &Statement) -> &'static str {
    match stmt {
        Statement::Let(_) => "let",
        Statement::Return(_) => "return",
        Statement::Expression(_) => "expr",
    }
}

/// Render the reconstructed statements. `current_line` marks statements that
/// start on the selected token's line.
pub fn render_ast_pane(
    frame: &mut Frame,
    area: Rect,
    program: &Program,
    current_line: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" AST ({} statements) ", program.statements.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    if program.statements.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let max_scroll = program.statements.len().saturating_sub(visible_height);
    *scroll_offset = (*scroll_offset).min(max_scroll);

    let rows: Vec<Line> = program
        .statements
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|stmt| {
            let mut text_style = Style::default().fg(DEFAULT_THEME.fg);
            if stmt.location().line == current_line {
                text_style = text_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }

            Line::from(vec![
                Span::styled(
                    format!("{:<7}", statement_label(stmt)),
                    Style::default().fg(DEFAULT_THEME.keyword),
                ),
                Span::styled(stmt.to_string(), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows).block(block), area);
}

//! Token stream pane rendering

use crate::parser::Token;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the token pane with `selected` highlighted and kept in view.
pub fn render_tokens_pane(
    frame: &mut Frame,
    area: Rect,
    tokens: &[Token],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Tokens ({}) ", tokens.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    super::keep_in_view(scroll_offset, selected, visible_height, tokens.len());

    let rows: Vec<Line> = tokens
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, token)| {
            let mut kind_style = Style::default().fg(DEFAULT_THEME.primary);
            let mut literal_style = Style::default().fg(DEFAULT_THEME.fg);
            if idx == selected {
                kind_style = kind_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
                literal_style = literal_style.bg(DEFAULT_THEME.current_line_bg);
            }

            Line::from(vec![
                Span::styled(
                    format!("{:>7} ", token.location.to_string()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(format!("{:<8}", token.kind.to_string()), kind_style),
                Span::styled(format!("{:?}", token.literal), literal_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows).block(block), area);
}

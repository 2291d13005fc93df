//! Diagnostics pane rendering

use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render parse errors in report order with `selected` highlighted.
pub fn render_diagnostics_pane(
    frame: &mut Frame,
    area: Rect,
    errors: &[ParseError],
    selected: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Diagnostics ({}) ", errors.len()))
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    if errors.is_empty() {
        let paragraph = Paragraph::new("no errors")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.success));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    super::keep_in_view(scroll_offset, selected, visible_height, errors.len());

    let rows: Vec<Line> = errors
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, err)| {
            let mut message_style = Style::default().fg(DEFAULT_THEME.error);
            if is_focused && idx == selected {
                message_style = message_style
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD);
            }

            Line::from(vec![
                Span::styled(
                    format!("{:>7} ", err.location.to_string()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(err.message(), message_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows).block(block), area);
}

//! Source code pane rendering with syntax highlighting
//!
//! Highlighting reuses the real [`Lexer`] on each line, so what is coloured
//! as a keyword or an illegal character is exactly what the parser sees.

use crate::parser::{Lexer, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Let | TokenKind::Return => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::Int => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::Illegal => Style::default()
            .fg(DEFAULT_THEME.error)
            .add_modifier(Modifier::UNDERLINED),
        TokenKind::Ident => Style::default().fg(DEFAULT_THEME.fg),
        _ => Style::default().fg(DEFAULT_THEME.operator),
    }
}

/// Split one source line into styled spans, keeping the original spacing.
fn highlight_source_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut cursor = 0;

    for token in Lexer::new(line).tokenize() {
        if token.is(TokenKind::Eof) {
            break;
        }
        let start = token.location.column.saturating_sub(1);
        if start > cursor {
            spans.push(Span::raw(chars[cursor..start].iter().collect::<String>()));
        }
        cursor = start + token.literal.chars().count();
        spans.push(Span::styled(token.literal, token_style(token.kind)));
    }

    if cursor < chars.len() {
        spans.push(Span::raw(chars[cursor..].iter().collect::<String>()));
    }

    Line::from(spans)
}

/// Render the source code pane, keeping `current_line` (1-based) in view.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(DEFAULT_THEME.border(is_focused));

    let lines: Vec<&str> = source_code.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    super::keep_in_view(
        scroll_offset,
        current_line.saturating_sub(1),
        visible_height,
        lines.len(),
    );

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = line_num == current_line;

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let mut content_line = highlight_source_line(line);
            if is_current {
                for span in &mut content_line.spans {
                    span.style = span
                        .style
                        .patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
                }
            }

            let mut final_spans = vec![Span::styled(format!("{:4} ", line_num), num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let source = "  let  x =\t5 + @ ;  ";
        assert_eq!(text(&highlight_source_line(source)), source);
    }

    #[test]
    fn test_highlight_keyword_span() {
        let line = highlight_source_line("let x");
        assert_eq!(line.spans[0].content, "let");
        assert_eq!(line.spans[0].style, token_style(TokenKind::Let));
    }
}

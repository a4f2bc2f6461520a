//! Command-line input widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::GameTheme;

/// Bottom input line: the `:` command buffer, or a hint when idle.
pub struct InputWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a GameTheme,
    placeholder: &'a str,
    is_command_mode: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a GameTheme) -> Self {
        Self {
            content,
            cursor_position: content.len(),
            theme,
            placeholder: "press : for commands, ? for help",
            is_command_mode: false,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn command_mode(mut self, is_command: bool) -> Self {
        self.is_command_mode = is_command;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_command_mode));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if !self.is_command_mode {
            Line::from(Span::styled(
                self.placeholder,
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            // Buffer holds ":cmd"; show the ':' as a fixed prefix.
            let display_content = self.content.strip_prefix(':').unwrap_or(self.content);
            let adjusted_cursor = self.cursor_position.saturating_sub(1);

            // Character-based slicing for unicode safety.
            let before_cursor: String = display_content.chars().take(adjusted_cursor).collect();
            let at_cursor = display_content
                .chars()
                .nth(adjusted_cursor)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let char_count = display_content.chars().count();
            let after_cursor: String = if adjusted_cursor < char_count {
                display_content.chars().skip(adjusted_cursor + 1).collect()
            } else {
                String::new()
            };

            Line::from(vec![
                Span::styled(":", self.theme.accent_style()),
                Span::raw(before_cursor),
                Span::styled(
                    at_cursor,
                    Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
                ),
                Span::raw(after_cursor),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}

//! Game log display widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use lifesim_core::GameLog;

use crate::ui::theme::GameTheme;

/// Widget showing the game log, newest entries at the top.
pub struct LogWidget<'a> {
    log: &'a GameLog,
    scroll: usize,
    theme: &'a GameTheme,
}

impl<'a> LogWidget<'a> {
    pub fn new(log: &'a GameLog, theme: &'a GameTheme) -> Self {
        Self {
            log,
            scroll: 0,
            theme,
        }
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Widget for LogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Log [j/k scroll, c clear] ")
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(true));

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let mut lines: Vec<Line> = Vec::new();
        for entry in self.log.entries() {
            lines.push(Line::from(vec![
                Span::styled(format!("[{}] ", entry.stamp()), self.theme.stamp_style()),
                Span::styled(entry.text.clone(), self.theme.text_style()),
            ]));
        }
        if lines.is_empty() {
            lines.push(Line::from(Span::styled(
                "Nothing has happened yet.",
                self.theme.system_style(),
            )));
        }

        let visible_height = inner.height as usize;
        let total_lines = lines.len();
        let max_scroll = total_lines.saturating_sub(visible_height);
        let scroll = self.scroll.min(max_scroll);

        let paragraph = Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false });
        paragraph.render(inner, buf);

        // Hint when older entries are below the fold.
        if scroll < max_scroll {
            let remaining = max_scroll - scroll;
            let hint = format!(" ↓{remaining} older ");
            let hint_y = inner.y + inner.height.saturating_sub(1);
            let hint_style = Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM);
            for (i, ch) in hint.chars().enumerate() {
                let x = inner.x + (i as u16);
                if x < inner.x + inner.width.saturating_sub(2) {
                    buf[(x, hint_y)].set_char(ch).set_style(hint_style);
                }
            }
        }
    }
}

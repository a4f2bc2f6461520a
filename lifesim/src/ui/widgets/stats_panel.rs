//! Player stats panel for the sidebar.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use lifesim_core::Player;

use crate::ui::theme::GameTheme;

/// Sidebar panel showing the full player record.
pub struct StatsPanelWidget<'a> {
    player: &'a Player,
    theme: &'a GameTheme,
}

impl<'a> StatsPanelWidget<'a> {
    pub fn new(player: &'a Player, theme: &'a GameTheme) -> Self {
        Self { player, theme }
    }
}

impl Widget for StatsPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(" {} ", self.player.name))
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(false));

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // identity
                Constraint::Length(2), // health bar
                Constraint::Length(2), // stamina bar
                Constraint::Length(2), // family favor bar
                Constraint::Length(2), // wealth
                Constraint::Length(5), // attributes
                Constraint::Min(0),    // progress
            ])
            .split(inner);

        // Identity
        let identity = vec![
            Line::from(vec![
                Span::raw(format!("{}y {}m", self.player.age, self.player.month)),
                Span::raw("  "),
                Span::styled(
                    self.player.gender.name(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
                Span::raw("  "),
                Span::styled(
                    self.player.city.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]),
            Line::from(format!("Job: {}", self.player.job)),
            Line::from(Span::styled(
                self.player.status.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            )),
        ];
        Paragraph::new(identity).render(chunks[0], buf);

        render_meter(buf, chunks[1], "Health", self.player.health, self.theme);
        render_meter(buf, chunks[2], "Stamina", self.player.stamina, self.theme);
        render_meter(buf, chunks[3], "Family", self.player.family_favor, self.theme);

        // Wealth has no ceiling, so it gets a plain line.
        let wealth = Line::from(vec![
            Span::raw("Wealth: "),
            Span::styled(
                format!("{}", self.player.wealth),
                self.theme.accent_style(),
            ),
        ]);
        Paragraph::new(wealth).render(chunks[4], buf);

        // Attributes
        let attributes = vec![
            attribute_line("INT", self.player.intelligence),
            attribute_line("CHM", self.player.charm),
            attribute_line("SEN", self.player.sensibility),
            attribute_line("KND", self.player.kindness),
            attribute_line("LCK", self.player.luck),
        ];
        Paragraph::new(attributes).render(chunks[5], buf);

        // Progress counters
        if chunks[6].height > 0 {
            let progress = vec![
                Line::from(format!("School {}/5", self.player.school_progress)),
                Line::from(format!("Quizzes {}/10", self.player.exam_progress)),
            ];
            Paragraph::new(progress).render(chunks[6], buf);
        }
    }
}

fn attribute_line(abbr: &str, value: i32) -> Line<'static> {
    Line::from(format!("{abbr}: {value:3}"))
}

fn render_meter(buf: &mut Buffer, area: Rect, label: &str, value: i32, theme: &GameTheme) {
    let ratio = f64::from(value.clamp(0, 100)) / 100.0;
    let gauge = Gauge::default()
        .block(Block::default())
        .gauge_style(Style::default().fg(theme.bar_color(ratio)))
        .ratio(ratio)
        .label(format!("{label}: {value}/100"));
    gauge.render(area, buf);
}

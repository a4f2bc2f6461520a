//! Color theme and styling for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// UI color theme.
#[derive(Debug, Clone)]
pub struct GameTheme {
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Meter colors for the 0-100 bars
    pub bar_high: Color,
    pub bar_mid: Color,
    pub bar_low: Color,

    // Text colors
    pub stamp_text: Color,
    pub system_text: Color,
    pub accent_text: Color,
    pub warn_text: Color,
}

impl Default for GameTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            bar_high: Color::Green,
            bar_mid: Color::Yellow,
            bar_low: Color::Red,

            stamp_text: Color::DarkGray,
            system_text: Color::DarkGray,
            accent_text: Color::Cyan,
            warn_text: Color::LightRed,
        }
    }
}

impl GameTheme {
    /// Style for ordinary log text.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Style for the date stamp on a log line.
    pub fn stamp_style(&self) -> Style {
        Style::default()
            .fg(self.stamp_text)
            .add_modifier(Modifier::DIM)
    }

    /// Style for status-line and hint text.
    pub fn system_style(&self) -> Style {
        Style::default()
            .fg(self.system_text)
            .add_modifier(Modifier::DIM)
    }

    /// Style for highlighted values and selections.
    pub fn accent_style(&self) -> Style {
        Style::default()
            .fg(self.accent_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error feedback.
    pub fn warn_style(&self) -> Style {
        Style::default().fg(self.warn_text)
    }

    /// Bar color for a 0-100 meter.
    pub fn bar_color(&self, ratio: f64) -> Color {
        if ratio > 0.5 {
            self.bar_high
        } else if ratio > 0.25 {
            self.bar_mid
        } else {
            self.bar_low
        }
    }

    /// Border style, brighter when focused.
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

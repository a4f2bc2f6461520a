//! Render orchestration for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, InputMode, Screen};
use crate::new_life::StartChoice;
use crate::ui::widgets::{InputWidget, LogWidget, StatsPanelWidget};

/// Main render function.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    match app.screen {
        Screen::Start => render_start_screen(frame, app, area),
        Screen::Game => render_game_screen(frame, app, area),
    }

    if app.show_help {
        render_help_overlay(frame, app, area);
    }
}

// ============================================================================
// Game screen
// ============================================================================

fn render_game_screen(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Min(0),    // log + sidebar
            Constraint::Length(1), // status line
            Constraint::Length(1), // hotkey line
            Constraint::Length(3), // command input
        ])
        .split(area);

    render_title_bar(frame, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(rows[1]);

    let log_widget = LogWidget::new(app.game.log(), &app.theme).scroll(app.log_scroll);
    frame.render_widget(log_widget, columns[0]);

    if let Some(player) = app.game.player() {
        let stats = StatsPanelWidget::new(player, &app.theme);
        frame.render_widget(stats, columns[1]);
    }

    render_status_line(frame, app, rows[2]);
    render_hotkey_line(frame, app, rows[3]);

    let placeholder = if app.game.has_player() {
        "press : for commands, ? for help"
    } else {
        "no active life - :q to quit"
    };
    let input = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .command_mode(matches!(app.input_mode, InputMode::Command))
        .placeholder(placeholder);
    frame.render_widget(input, rows[4]);
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.game.player() {
        Some(p) => format!(" {} | {} years, month {} | {} ", p.name, p.age, p.month, p.job),
        None => " Life Simulator ".to_string(),
    };

    let line = Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.status_message() else {
        return;
    };
    let style = if message.starts_with("GM:") || message.contains("failed") {
        app.theme.warn_style()
    } else {
        app.theme.system_style()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(message.to_string(), style))),
        area,
    );
}

fn render_hotkey_line(frame: &mut Frame, app: &App, area: Rect) {
    let hotkeys = [
        ("s", "study"),
        ("w", "work"),
        ("r", "rest"),
        ("f", "family"),
        ("o", "social"),
        ("e", "event"),
        ("n", "next month"),
        ("c", "clear"),
        ("q", "quit"),
    ];

    let mut spans = Vec::new();
    for (key, label) in hotkeys {
        spans.push(Span::styled(key, app.theme.accent_style()));
        spans.push(Span::styled(format!(" {label}  "), app.theme.system_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

// ============================================================================
// Start screen
// ============================================================================

fn render_start_screen(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_fixed(46, 14, area);
    frame.render_widget(Clear, popup);

    let selected = Style::default()
        .fg(app.theme.border_focused)
        .add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let name_display = if app.start.name.is_empty() {
        Span::styled("Nobody (type a name)", dim)
    } else {
        Span::styled(app.start.name.clone(), app.theme.accent_style())
    };

    let gender = app.start.gender();
    let new_life_style = if app.start.choice == StartChoice::NewLife {
        selected
    } else {
        Style::default()
    };
    let continue_style = if !app.start.can_continue {
        dim
    } else if app.start.choice == StartChoice::Continue {
        selected
    } else {
        Style::default()
    };

    let lines = vec![
        Line::from(Span::styled(
            "A small life, one month at a time.",
            dim,
        )),
        Line::from(""),
        Line::from(vec![Span::raw("Name:   "), name_display]),
        Line::from(vec![
            Span::raw("Gender: "),
            Span::styled(format!("< {} >", gender.name()), app.theme.accent_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled("[Enter] Start a new life", new_life_style)),
        Line::from(Span::styled(
            if app.start.can_continue {
                "[Enter] Continue saved life"
            } else {
                "         (no saved life found)"
            },
            continue_style,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "type to name - arrows pick gender - Tab switches - Esc quits",
            dim,
        )),
    ];

    let block = Block::default()
        .title(" Life Simulator ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        popup,
    );

    // Status feedback (e.g. "No save found") below the box.
    if let Some(message) = app.status_message() {
        let below = Rect {
            x: popup.x,
            y: (popup.y + popup.height).min(area.height.saturating_sub(1)),
            width: popup.width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message.to_string(), app.theme.warn_style())),
            below,
        );
    }
}

// ============================================================================
// Help overlay
// ============================================================================

fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup = centered_rect_fixed(52, 22, area);
    frame.render_widget(Clear, popup);

    let heading = Style::default().add_modifier(Modifier::UNDERLINED);
    let help_text = vec![
        Line::from(Span::styled(
            " Life Simulator - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Actions:", heading)),
        Line::from("  s  study      (school progress, intelligence)"),
        Line::from("  w  work       (wealth, a little charm)"),
        Line::from("  r  rest       (health, stamina)"),
        Line::from("  f  family     (family favor, kindness, costs money)"),
        Line::from("  o  socialize  (charm, sensibility, maybe luck)"),
        Line::from("  e  random event"),
        Line::from("  n  next month (decay, quizzes, bracket events, save)"),
        Line::from(""),
        Line::from(Span::styled("Navigation:", heading)),
        Line::from("  j/k or arrows  scroll the log, g jumps to newest"),
        Line::from("  c              clear the log"),
        Line::from(""),
        Line::from(Span::styled("Commands:", heading)),
        Line::from("  :set money 500   :add luck 3   :event"),
        Line::from("  :w save    :reset delete save    :q quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    frame.render_widget(
        Paragraph::new(help_text).block(block).wrap(Wrap { trim: false }),
        popup,
    );
}

// ============================================================================
// Layout helpers
// ============================================================================

/// A fixed-size rectangle centered in `area`, clipped to fit.
fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

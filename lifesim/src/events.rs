//! Event handling for the TUI.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use lifesim_core::Action;

use crate::app::{App, InputMode, Screen};
use crate::new_life::StartIntent;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Continue,
    Quit,
    NeedsRedraw,
}

/// Handle a terminal event.
pub fn handle_event(app: &mut App, event: Event) -> EventResult {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Mouse(mouse) => handle_mouse_event(app, mouse),
        Event::Resize(_, _) => EventResult::NeedsRedraw,
        _ => EventResult::Continue,
    }
}

fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.scroll_up(3);
            EventResult::NeedsRedraw
        }
        MouseEventKind::ScrollDown => {
            app.scroll_down(3);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

fn handle_key_event(app: &mut App, key: KeyEvent) -> EventResult {
    // Ctrl-C always quits.
    if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
        return EventResult::Quit;
    }

    match app.screen {
        Screen::Start => handle_start_key(app, key),
        Screen::Game => {
            if app.show_help {
                return handle_help_key(app, key);
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_mode(app, key),
                InputMode::Command => handle_command_mode(app, key),
            }
        }
    }
}

fn handle_start_key(app: &mut App, key: KeyEvent) -> EventResult {
    match app.start.handle_key(key) {
        StartIntent::Quit => EventResult::Quit,
        StartIntent::Begin => {
            app.start_new_life();
            EventResult::NeedsRedraw
        }
        StartIntent::Continue => {
            app.continue_game();
            EventResult::NeedsRedraw
        }
        StartIntent::None => EventResult::NeedsRedraw,
    }
}

fn handle_help_key(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

/// NORMAL mode: single-key actions and navigation.
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Char(':') => {
            app.enter_command_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Char('?') => {
            app.show_help = true;
            EventResult::NeedsRedraw
        }
        KeyCode::Char('q') => EventResult::Quit,

        // Monthly actions
        KeyCode::Char('s') => action(app, Action::Study),
        KeyCode::Char('w') => action(app, Action::Work),
        KeyCode::Char('r') => action(app, Action::Rest),
        KeyCode::Char('f') => action(app, Action::Family),
        KeyCode::Char('o') => action(app, Action::Social),
        KeyCode::Char('e') => action(app, Action::Random),

        // Close out the month
        KeyCode::Char('n') | KeyCode::Enter => {
            app.clear_status();
            app.next_month();
            EventResult::NeedsRedraw
        }

        KeyCode::Char('c') => {
            app.clear_log();
            EventResult::NeedsRedraw
        }

        // Log navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.scroll_down(1);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.scroll_up(1);
            EventResult::NeedsRedraw
        }
        KeyCode::PageDown => {
            app.scroll_down(10);
            EventResult::NeedsRedraw
        }
        KeyCode::PageUp => {
            app.scroll_up(10);
            EventResult::NeedsRedraw
        }
        KeyCode::Char('g') => {
            app.scroll_to_top();
            EventResult::NeedsRedraw
        }

        _ => EventResult::Continue,
    }
}

fn action(app: &mut App, action: Action) -> EventResult {
    app.clear_status();
    app.perform(action);
    EventResult::NeedsRedraw
}

/// COMMAND mode: editing and executing a `:` line.
fn handle_command_mode(app: &mut App, key: KeyEvent) -> EventResult {
    match key.code {
        KeyCode::Esc => {
            app.leave_command_mode();
            EventResult::NeedsRedraw
        }
        KeyCode::Enter => {
            let command = app.submit_command();
            if command.len() > 1 {
                app.process_command(&command);
            }
            if app.should_quit {
                EventResult::Quit
            } else {
                EventResult::NeedsRedraw
            }
        }
        KeyCode::Backspace => {
            if app.cursor_position() > 1 {
                app.backspace();
            } else {
                // Backspace over the bare ':' leaves command mode.
                app.leave_command_mode();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Left => {
            if app.cursor_position() > 1 {
                app.cursor_left();
            }
            EventResult::NeedsRedraw
        }
        KeyCode::Right => {
            app.cursor_right();
            EventResult::NeedsRedraw
        }
        KeyCode::Char(c) => {
            app.type_char(c);
            EventResult::NeedsRedraw
        }
        _ => EventResult::Continue,
    }
}

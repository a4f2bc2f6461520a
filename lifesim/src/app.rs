//! Main application state and logic.

use std::path::PathBuf;

use lifesim_core::{persist, Action, Game};

use crate::new_life::StartScreen;
use crate::ui::theme::GameTheme;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// New life / continue chooser.
    Start,
    /// The running simulation.
    Game,
}

/// Input modes on the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Hotkeys drive actions (default).
    #[default]
    Normal,
    /// Entering a `:` command.
    Command,
}

/// Main application state.
pub struct App {
    pub game: Game,
    pub screen: Screen,
    pub start: StartScreen,

    pub theme: GameTheme,
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    pub log_scroll: usize,
    pub show_help: bool,
    status_message: Option<String>,
    pub should_quit: bool,

    pub save_path: PathBuf,
}

impl App {
    pub fn new(save_path: PathBuf) -> App {
        let can_continue = persist::has_save(&save_path);
        App {
            game: Game::new(),
            screen: Screen::Start,
            start: StartScreen::new(can_continue),
            theme: GameTheme::default(),
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            cursor_position: 0,
            log_scroll: 0,
            show_help: false,
            status_message: None,
            should_quit: false,
            save_path,
        }
    }

    // ========================================================================
    // Lifecycle intents
    // ========================================================================

    /// Begin the life configured on the start screen.
    pub fn start_new_life(&mut self) {
        let name = self.start.name.clone();
        self.game.new_life(&name, self.start.gender());
        self.screen = Screen::Game;
        self.log_scroll = 0;
        self.autosave();
    }

    /// Resume from the save file, if one is loadable.
    pub fn continue_game(&mut self) {
        match persist::load(&self.save_path) {
            Ok(Some(player)) => {
                self.game.resume(player);
                self.screen = Screen::Game;
                self.log_scroll = 0;
            }
            Ok(None) => {
                self.set_status("No save found. Start a new life first.");
                self.start.can_continue = false;
            }
            Err(e) => self.set_status(format!("Load failed: {e}")),
        }
    }

    /// Save on explicit request, with feedback.
    pub fn save_game(&mut self) {
        match persist::save_current(&self.game, &self.save_path) {
            Ok(true) => self.set_status("Game saved."),
            Ok(false) => self.set_status("Nothing to save yet."),
            Err(e) => self.set_status(format!("Save failed: {e}")),
        }
    }

    /// Delete the save and return to the start screen.
    pub fn hard_reset(&mut self) {
        if let Err(e) = persist::erase(&self.save_path) {
            self.set_status(format!("Reset failed: {e}"));
            return;
        }
        self.game.reset();
        self.screen = Screen::Start;
        self.start = StartScreen::new(false);
        self.set_status("Save deleted. Starting over.");
    }

    // ========================================================================
    // Game intents
    // ========================================================================

    /// Resolve one action this month.
    pub fn perform(&mut self, action: Action) {
        self.game.perform(action);
        self.log_scroll = 0;
    }

    /// Close out the month and auto-save silently.
    pub fn next_month(&mut self) {
        self.game.advance_month();
        self.log_scroll = 0;
        self.autosave();
    }

    /// Empty the game log.
    pub fn clear_log(&mut self) {
        self.game.clear_log();
        self.log_scroll = 0;
    }

    fn autosave(&mut self) {
        // Silent on success, like the monthly advance expects.
        if let Err(e) = persist::save_current(&self.game, &self.save_path) {
            self.set_status(format!("Auto-save failed: {e}"));
        }
    }

    // ========================================================================
    // Command mode
    // ========================================================================

    /// Enter command mode (buffer starts with `:`).
    pub fn enter_command_mode(&mut self) {
        self.input_mode = InputMode::Command;
        self.input_buffer.clear();
        self.input_buffer.push(':');
        self.cursor_position = 1;
    }

    /// Leave command mode, dropping the buffer.
    pub fn leave_command_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    /// Execute a `:` command line.
    pub fn process_command(&mut self, command: &str) {
        let cmd = command.trim_start_matches(':').trim();
        let parts: Vec<&str> = cmd.split_whitespace().collect();
        let Some(op) = parts.first() else {
            return;
        };

        match *op {
            "q" | "quit" | "exit" => self.should_quit = true,
            "w" | "save" => self.save_game(),
            "wq" => {
                self.save_game();
                self.should_quit = true;
            }
            "reset" => self.hard_reset(),
            "clear" => {
                self.clear_log();
                self.set_status("Log cleared.");
            }
            "help" | "h" => self.show_help = true,
            // Everything else goes to the GM console.
            _ => match self.game.gm_command(cmd) {
                Ok(()) => {
                    self.log_scroll = 0;
                    let feedback = self
                        .game
                        .log()
                        .latest()
                        .map(|e| e.text.clone())
                        .unwrap_or_else(|| "Done.".to_string());
                    self.set_status(feedback);
                }
                Err(e) => self.set_status(format!("GM: {e}")),
            },
        }
    }

    // ========================================================================
    // Input editing (command mode)
    // ========================================================================

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Insert a typed character at the cursor (unicode-safe).
    pub fn type_char(&mut self, c: char) {
        let byte_pos = self
            .input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len());
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
    }

    /// Remove the character before the cursor (unicode-safe).
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position)
            {
                self.input_buffer
                    .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Take the buffer for execution and return to normal mode.
    pub fn submit_command(&mut self) -> String {
        let command = std::mem::take(&mut self.input_buffer);
        self.cursor_position = 0;
        self.input_mode = InputMode::Normal;
        command
    }

    // ========================================================================
    // Log scrolling
    // ========================================================================

    pub fn scroll_up(&mut self, lines: usize) {
        self.log_scroll = self.log_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        // The widget caps to its real maximum at render time.
        self.log_scroll = self.log_scroll.saturating_add(lines).min(4096);
    }

    pub fn scroll_to_top(&mut self) {
        self.log_scroll = 0;
    }

    // ========================================================================
    // Status line
    // ========================================================================

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

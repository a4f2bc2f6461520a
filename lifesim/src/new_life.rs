//! Start screen: configure a new life or continue a saved one.

use crossterm::event::{KeyCode, KeyEvent};
use lifesim_core::Gender;

/// Longest name accepted on the start screen.
const MAX_NAME_LEN: usize = 24;

/// Which start-screen button is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    NewLife,
    Continue,
}

/// What the start screen wants the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartIntent {
    None,
    Begin,
    Continue,
    Quit,
}

/// State for the start screen.
pub struct StartScreen {
    pub name: String,
    gender_idx: usize,
    pub choice: StartChoice,
    pub can_continue: bool,
}

impl StartScreen {
    pub fn new(can_continue: bool) -> StartScreen {
        StartScreen {
            name: String::new(),
            gender_idx: 2, // Other, matching the blank default
            choice: StartChoice::NewLife,
            can_continue,
        }
    }

    pub fn gender(&self) -> Gender {
        Gender::all()[self.gender_idx]
    }

    /// Handle a key press and report the resulting intent.
    pub fn handle_key(&mut self, key: KeyEvent) -> StartIntent {
        match key.code {
            KeyCode::Esc => StartIntent::Quit,
            KeyCode::Enter => match self.choice {
                StartChoice::NewLife => StartIntent::Begin,
                StartChoice::Continue => StartIntent::Continue,
            },
            KeyCode::Left => {
                self.gender_idx = (self.gender_idx + Gender::all().len() - 1) % Gender::all().len();
                StartIntent::None
            }
            KeyCode::Right => {
                self.gender_idx = (self.gender_idx + 1) % Gender::all().len();
                StartIntent::None
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                if self.can_continue {
                    self.choice = match self.choice {
                        StartChoice::NewLife => StartChoice::Continue,
                        StartChoice::Continue => StartChoice::NewLife,
                    };
                }
                StartIntent::None
            }
            KeyCode::Backspace => {
                self.name.pop();
                StartIntent::None
            }
            KeyCode::Char(c) => {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(c);
                }
                StartIntent::None
            }
            _ => StartIntent::None,
        }
    }
}

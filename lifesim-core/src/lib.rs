//! Life simulation engine.
//!
//! One player record advanced through discrete monthly turns:
//! - Actions (study, work, rest, family, social, random) resolve
//!   immediately.
//! - The monthly advance applies natural decay, then the scheduled
//!   sub-systems (pop quizzes, age-bracket events), then normalization.
//! - A GM console tweaks any field for testing and play.
//!
//! The engine is synchronous and does no IO of its own; [`persist`]
//! reads and writes the single JSON save record on behalf of a
//! front-end.
//!
//! # Quick Start
//!
//! ```
//! use lifesim_core::{Action, Game, Gender};
//!
//! let mut game = Game::new();
//! game.new_life("Alice", Gender::Female);
//! game.perform(Action::Study);
//! game.advance_month();
//!
//! let player = game.player().unwrap();
//! assert!(player.intelligence >= 10);
//! ```

pub mod engine;
pub mod events;
pub mod gm;
pub mod log;
pub mod persist;
pub mod player;
pub mod rules;

// Primary public API
pub use engine::{Action, Game};
pub use gm::{Command as GmCommand, Field, GmError};
pub use log::{GameLog, LogEntry};
pub use persist::{SaveError, DEFAULT_SAVE_FILE};
pub use player::{AgeBracket, Gender, Player};

//! Save-file persistence.
//!
//! The save record is the [`Player`] serialized as JSON at a single fixed
//! path. Anything unreadable - missing file, parse failure, wrong shape -
//! loads as "no save" rather than an error; the sim treats saves as
//! disposable.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::engine::Game;
use crate::player::Player;

/// Default save location, relative to the working directory.
pub const DEFAULT_SAVE_FILE: &str = "life_save.json";

/// Errors from writing or deleting a save.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the player to `path`, replacing any previous save.
pub fn save(player: &Player, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let content = serde_json::to_string_pretty(player)?;
    fs::write(path, content)?;
    Ok(())
}

/// Read a save if one is present and readable.
///
/// Returns `Ok(None)` for a missing file or a record that does not parse
/// as a complete player; only unexpected IO failures are errors.
pub fn load(path: impl AsRef<Path>) -> Result<Option<Player>, SaveError> {
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_str(&content).ok())
}

/// Delete the save file. Missing files are fine.
pub fn erase(path: impl AsRef<Path>) -> Result<(), SaveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// True if a loadable save exists at `path`.
pub fn has_save(path: impl AsRef<Path>) -> bool {
    matches!(load(path), Ok(Some(_)))
}

/// Save the game's current player, if there is one.
///
/// Returns whether a record was written; with no active player there is
/// nothing to persist and nothing happens.
pub fn save_current(game: &Game, path: impl AsRef<Path>) -> Result<bool, SaveError> {
    match game.player() {
        Some(player) => {
            save(player, path)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Gender;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("save.json");

        let mut player = Player::new("Roundtrip", Gender::Male);
        player.age = 17;
        player.month = 9;
        player.wealth = 1234;
        player.school_progress = 3;
        player.status = "Working for pay".to_string();

        save(&player, &path).expect("save");
        let loaded = load(&path).expect("load").expect("some save");

        assert_eq!(loaded, player);
    }

    #[test]
    fn test_missing_file_is_no_save() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nothing_here.json");

        assert!(load(&path).expect("load").is_none());
        assert!(!has_save(&path));
    }

    #[test]
    fn test_malformed_save_is_no_save() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("save.json");

        std::fs::write(&path, "{ not json").expect("write");
        assert!(load(&path).expect("load").is_none());

        // Valid JSON but missing required fields is no save either.
        std::fs::write(&path, r#"{"name": "Ghost"}"#).expect("write");
        assert!(load(&path).expect("load").is_none());
    }

    #[test]
    fn test_save_current_skips_empty_games() {
        use crate::engine::Game;
        use crate::player::Gender;

        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("save.json");

        let mut game = Game::new();
        assert!(!save_current(&game, &path).expect("save"));
        assert!(!has_save(&path));

        game.new_life("Live", Gender::Female);
        assert!(save_current(&game, &path).expect("save"));
        assert!(has_save(&path));
    }

    #[test]
    fn test_erase_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("save.json");

        let player = Player::new("Gone", Gender::Other);
        save(&player, &path).expect("save");
        assert!(has_save(&path));

        erase(&path).expect("erase");
        assert!(!has_save(&path));
        erase(&path).expect("second erase");
    }
}

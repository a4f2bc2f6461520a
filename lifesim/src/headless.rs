//! Headless mode.
//!
//! A line-oriented front-end for scripted play and QA: every action and
//! lifecycle intent is a word on stdin, and new log entries are echoed
//! after each command.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use lifesim_core::{persist, Action, Game, Gender};

/// Configuration for a headless run.
pub struct HeadlessConfig {
    /// Start a life immediately under this name.
    pub name: Option<String>,
    pub gender: Gender,
    pub save_path: PathBuf,
}

/// Run the line-oriented interface until EOF or `quit`.
pub fn run_headless(config: HeadlessConfig) -> io::Result<()> {
    let mut game = Game::new();
    let mut seen_log: u64 = 0;
    let save_path = config.save_path;

    println!("=== Life Simulator (headless) ===");
    if let Some(name) = config.name {
        game.new_life(&name, config.gender);
        autosave(&game, &save_path);
    } else {
        println!("No life started. Use: new <name> [f|m|other], or: continue");
    }
    drain_log(&game, &mut seen_log);
    print_help();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0].to_lowercase().as_str() {
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "help" => print_help(),
            "new" => {
                let name = parts.get(1).copied().unwrap_or("");
                let gender = parts
                    .get(2)
                    .and_then(|g| Gender::parse(g))
                    .unwrap_or_default();
                game.new_life(name, gender);
                autosave(&game, &save_path);
            }
            "continue" => match persist::load(&save_path) {
                Ok(Some(player)) => game.resume(player),
                Ok(None) => println!("[ERROR] No save found at {}", save_path.display()),
                Err(e) => println!("[ERROR] Load failed: {e}"),
            },
            "next" => {
                game.advance_month();
                autosave(&game, &save_path);
            }
            "status" => print_status(&game),
            "log" => {
                let count = parts
                    .get(1)
                    .and_then(|n| n.parse::<usize>().ok())
                    .unwrap_or(10);
                for entry in game.log().entries().take(count) {
                    println!("[{}] {}", entry.stamp(), entry.text);
                }
            }
            "clear" => game.clear_log(),
            "save" => match persist::save_current(&game, &save_path) {
                Ok(true) => println!("[SAVED] {}", save_path.display()),
                Ok(false) => println!("[ERROR] Nothing to save yet."),
                Err(e) => println!("[ERROR] Save failed: {e}"),
            },
            "reset" => {
                match persist::erase(&save_path) {
                    Ok(()) => {
                        game.reset();
                        println!("[RESET] Save deleted.");
                    }
                    Err(e) => println!("[ERROR] Reset failed: {e}"),
                }
            }
            // GM console, with or without the `gm` prefix.
            "gm" => run_gm(&mut game, &parts[1..].join(" ")),
            "set" | "add" | "event" => run_gm(&mut game, line),
            other => match Action::parse(other) {
                Some(action) => game.perform(action),
                None => println!("[ERROR] Unknown command: {other}. Type help."),
            },
        }

        drain_log(&game, &mut seen_log);
    }

    Ok(())
}

fn run_gm(game: &mut Game, command: &str) {
    if let Err(e) = game.gm_command(command) {
        println!("[ERROR] GM: {e}");
    }
}

fn autosave(game: &Game, save_path: &Path) {
    if let Err(e) = persist::save_current(game, save_path) {
        println!("[ERROR] Auto-save failed: {e}");
    }
}

/// Echo entries pushed since the last drain, oldest first.
fn drain_log(game: &Game, seen: &mut u64) {
    let total = game.log().total_pushed();
    let new = (total - *seen) as usize;
    *seen = total;

    let fresh: Vec<_> = game.log().entries().take(new).collect();
    for entry in fresh.iter().rev() {
        println!("[{}] {}", entry.stamp(), entry.text);
    }
}

fn print_status(game: &Game) {
    let Some(p) = game.player() else {
        println!("[STATUS] No active life.");
        return;
    };
    println!("[STATUS]");
    println!("  {} ({}) - {} - {}", p.name, p.gender, p.city, p.job);
    println!("  Age {} (month {}), status: {}", p.age, p.month, p.status);
    println!(
        "  Wealth {}  Health {}/100  Stamina {}/100  Family {}/100",
        p.wealth, p.health, p.stamina, p.family_favor
    );
    println!(
        "  INT {}  CHM {}  SEN {}  KND {}  LCK {}",
        p.intelligence, p.charm, p.sensibility, p.kindness, p.luck
    );
    println!(
        "  School {}/5  Quizzes {}/10",
        p.school_progress, p.exam_progress
    );
}

fn print_help() {
    println!("Commands:");
    println!("  new <name> [f|m|other] - start a new life");
    println!("  continue               - load the saved life");
    println!("  study | work | rest | family | social - act this month");
    println!("  event                  - roll a random event");
    println!("  next                   - advance to the next month (auto-saves)");
    println!("  status                 - print the full record");
    println!("  log [n]                - print the n newest log entries");
    println!("  clear                  - clear the log");
    println!("  save / reset           - write / delete the save file");
    println!("  gm set money 500       - GM console (also: add, event)");
    println!("  quit                   - exit");
}

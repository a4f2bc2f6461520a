//! Life simulator TUI application.
//!
//! A terminal interface for a small month-by-month life simulation:
//! pick actions, advance the month, watch the log, and poke the numbers
//! with a `:` GM console.
//!
//! # Headless Mode
//!
//! Run with `--headless` for a line-oriented interface suitable for
//! scripting and automated testing:
//!
//! ```bash
//! cargo run -p lifesim -- --headless --name Alice --gender f
//! ```

mod app;
mod events;
mod headless;
mod new_life;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lifesim_core::{Gender, DEFAULT_SAVE_FILE};

use app::App;
use events::{handle_event, EventResult};
use ui::render::render;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let save_path = parse_save_path(&args);

    if args.iter().any(|a| a == "--headless") {
        let config = headless::HeadlessConfig {
            name: arg_value(&args, "--name").map(str::to_string),
            gender: arg_value(&args, "--gender")
                .and_then(Gender::parse)
                .unwrap_or_default(),
            save_path,
        };
        return headless::run_headless(config).map_err(Into::into);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, App::new(save_path));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> std::io::Result<()> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;
            match handle_event(&mut app, ev) {
                EventResult::Quit => return Ok(()),
                EventResult::NeedsRedraw | EventResult::Continue => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Pull the value following a flag, if present.
fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_save_path(args: &[String]) -> PathBuf {
    arg_value(args, "--save")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_FILE))
}

fn print_help() {
    println!("Life Simulator - a month-by-month life toy");
    println!();
    println!("USAGE:");
    println!("  lifesim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help         Show this help message");
    println!("  --headless         Run the line-oriented interface (no TUI)");
    println!("  --save <PATH>      Save file location (default: {DEFAULT_SAVE_FILE})");
    println!();
    println!("HEADLESS OPTIONS (only with --headless):");
    println!("  --name <NAME>      Start a life immediately under this name");
    println!("  --gender <G>       f | m | other (default: other)");
    println!();
    println!("KEYS (TUI):");
    println!("  s/w/r/f/o  study, work, rest, family, socialize");
    println!("  e          random event        n  next month");
    println!("  :          command line (:set money 500, :w, :reset, :q)");
    println!("  ?          help overlay        q  quit");
}

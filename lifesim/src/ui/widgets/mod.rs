//! Reusable TUI widgets.

pub mod input;
pub mod log_view;
pub mod stats_panel;

pub use input::InputWidget;
pub use log_view::LogWidget;
pub use stats_panel::StatsPanelWidget;

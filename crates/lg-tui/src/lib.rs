//! lg-tui: Terminal viewer using ratatui
//!
//! Draws a generated floor and lets a single explorer walk it.

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;
pub mod world;

pub use app::App;
pub use input::Command;
pub use theme::Theme;

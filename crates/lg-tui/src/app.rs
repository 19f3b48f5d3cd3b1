//! Application state and main UI controller

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use tracing::{debug, warn};

use lg_core::movement::Explorer;
use lg_core::{Level, LevelConfig, LevelResult, LevelRng, generate_level};

use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// Application state
pub struct App {
    /// Configuration every regeneration uses
    config: LevelConfig,

    /// Floor currently shown
    level: Level,

    /// Seed the current floor was generated from
    seed: u64,

    explorer: Explorer,

    /// Should quit
    should_quit: bool,

    /// Last status message, cleared by the next command
    message: Option<String>,

    theme: Theme,
}

impl App {
    /// Generate the first floor from `seed`
    pub fn new(config: LevelConfig, seed: u64, theme: Theme) -> LevelResult<Self> {
        let level = generate_level(&config, &mut LevelRng::new(seed))?;
        let explorer = Explorer::spawn(&level);
        Ok(Self {
            config,
            level,
            seed,
            explorer,
            should_quit: false,
            message: None,
            theme,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key_to_command(key),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: Command) {
        self.message = None;
        match command {
            Command::Move(direction) => {
                if !self.explorer.try_move(&self.level, direction) {
                    debug!(%direction, position = %self.explorer.position(), "blocked");
                }
            }
            Command::Regenerate => {
                let rng = LevelRng::from_entropy();
                self.regenerate(rng.seed());
            }
            Command::Quit => self.should_quit = true,
        }
    }

    /// Replace the floor with one generated from `seed`.
    ///
    /// On failure the current floor is kept and the error is shown.
    pub fn regenerate(&mut self, seed: u64) {
        match generate_level(&self.config, &mut LevelRng::new(seed)) {
            Ok(level) => {
                self.explorer = Explorer::spawn(&level);
                self.level = level;
                self.seed = seed;
                debug!(seed, "regenerated level");
            }
            Err(err) => {
                warn!(seed, %err, "regeneration failed");
                self.message = Some(format!("Seed {seed}: {err}"));
            }
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: map on top, status below
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(2),    // Map + border
                Constraint::Length(2), // Status lines
            ])
            .split(frame.area());

        let map = MapWidget::new(&self.level, Some(self.explorer.position()), &self.theme);
        frame.render_widget(map, chunks[0]);

        let status = StatusWidget::new(
            &self.level,
            self.seed,
            self.explorer.position(),
            self.message(),
            &self.theme,
        );
        frame.render_widget(status, chunks[1]);
    }
}

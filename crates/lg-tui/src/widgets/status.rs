//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use lg_core::Level;
use lg_core::grid::Coordinate;

use crate::theme::Theme;

/// Widget for the two status lines under the map
pub struct StatusWidget<'a> {
    level: &'a Level,
    seed: u64,
    position: Coordinate,
    message: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(
        level: &'a Level,
        seed: u64,
        position: Coordinate,
        message: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            level,
            seed,
            position,
            message,
            theme,
        }
    }
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let level = self.level;

        // Line 1: seed, position, room/corridor summary
        let line1 = format!(
            "Seed:{} Pos:{} Rooms:{}+{} Links:{} DeadEnds:{}",
            self.seed,
            self.position,
            level.real_rooms().count(),
            level.dummy_rooms().count(),
            level.links().len(),
            level.dead_ends(),
        );

        // Line 2: last message, or key help
        let line2 = match self.message {
            Some(msg) => Line::styled(msg.to_string(), Style::default().fg(self.theme.bad)),
            None => Line::styled(
                "hjklyubn/arrows: move  r: new floor  q: quit",
                Style::default().fg(self.theme.text_dim),
            ),
        };

        let text = vec![
            Line::styled(line1, Style::default().fg(self.theme.text)),
            line2,
        ];
        Paragraph::new(text).render(area, buf);
    }
}

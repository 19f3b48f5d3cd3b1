//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use lg_core::Level;
use lg_core::grid::Coordinate;

use crate::theme::Theme;
use crate::world::CellLayout;

/// Widget for rendering a generated floor.
///
/// The row with the highest `y` is drawn at the top. Floors larger than the
/// area are clipped on the right and at the bottom.
pub struct MapWidget<'a> {
    level: &'a Level,
    explorer: Option<Coordinate>,
    theme: &'a Theme,
}

impl<'a> MapWidget<'a> {
    pub fn new(level: &'a Level, explorer: Option<Coordinate>, theme: &'a Theme) -> Self {
        Self {
            level,
            explorer,
            theme,
        }
    }

    fn cell_display(&self, coord: Coordinate) -> (char, Style) {
        if self.explorer == Some(coord) {
            return ('@', Style::default().fg(self.theme.map_explorer).bold());
        }

        match self.level.tile_at(coord) {
            Some(tile) => {
                let kind = tile.kind();
                (kind.symbol(), Style::default().fg(self.theme.tile_color(kind)))
            }
            None => (' ', Style::default()),
        }
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("levelgrid");

        let inner = block.inner(area);
        block.render(area, buf);

        let height = self.level.height();
        let layout = CellLayout::terminal(inner, height);
        let rows = height.min(i32::from(inner.height));
        let cols = self.level.width().min(i32::from(inner.width));
        for y in height - rows..height {
            for x in 0..cols {
                let coord = Coordinate::new(x, y);
                let Some(pos) = layout.world_position_of(coord).to_screen(inner) else {
                    continue;
                };
                let (ch, style) = self.cell_display(coord);
                if let Some(cell) = buf.cell_mut(pos) {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}

//! Mapping from tile coordinates to render space

use ratatui::layout::{Position, Rect};

use lg_core::grid::Coordinate;

/// Position in render space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    /// Terminal cell containing this position, if it lies inside `area`
    pub fn to_screen(self, area: Rect) -> Option<Position> {
        let (x, y) = (self.x.floor(), self.y.floor());
        let inside = x >= f32::from(area.left())
            && x < f32::from(area.right())
            && y >= f32::from(area.top())
            && y < f32::from(area.bottom());
        inside.then(|| Position::new(x as u16, y as u16))
    }
}

/// Size and placement of the tile grid in render space.
///
/// It never looks at a generated level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellLayout {
    pub cell_width: f32,
    pub cell_height: f32,
    /// Render-space position of the corner of tile `(0, 0)`
    pub origin: WorldPosition,
}

impl Default for CellLayout {
    fn default() -> Self {
        Self {
            cell_width: 1.0,
            cell_height: 1.0,
            origin: WorldPosition::default(),
        }
    }
}

impl CellLayout {
    pub fn new(cell_width: f32, cell_height: f32, origin: WorldPosition) -> Self {
        Self {
            cell_width,
            cell_height,
            origin,
        }
    }

    /// One terminal cell per tile with `y` growing upward, tile row
    /// `rows - 1` on the top line of `area`
    pub fn terminal(area: Rect, rows: i32) -> Self {
        Self::new(
            1.0,
            -1.0,
            WorldPosition {
                x: f32::from(area.x),
                y: f32::from(area.y) + rows as f32,
            },
        )
    }

    /// Center of the cell of `coord`
    pub fn world_position_of(&self, coord: Coordinate) -> WorldPosition {
        WorldPosition {
            x: self.origin.x + (coord.x as f32 + 0.5) * self.cell_width,
            y: self.origin.y + (coord.y as f32 + 0.5) * self.cell_height,
        }
    }
}

//! Terminal color theme

use lg_core::grid::TileKind;
use ratatui::style::Color;

/// Color theme for the viewer.
/// Widgets take their colors from here instead of hardcoding them.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (key help)
    pub text_dim: Color,
    pub border: Color,
    /// Status messages such as a failed regeneration
    pub bad: Color,

    // Map terrain
    pub map_explorer: Color,
    pub map_wall: Color,
    pub map_hard_limit: Color,
    pub map_room: Color,
    pub map_room_wall: Color,
    pub map_corridor: Color,
    pub map_water: Color,
}

impl Theme {
    /// Palette of the floor colors used by the level editor view
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            border: Color::White,
            bad: Color::Red,
            map_explorer: Color::White,
            map_wall: Color::Red,
            map_hard_limit: Color::Black,
            map_room: Color::Green,
            map_room_wall: Color::Yellow,
            map_corridor: Color::Cyan,
            map_water: Color::Blue,
        }
    }

    pub fn tile_color(&self, kind: TileKind) -> Color {
        match kind {
            TileKind::Wall => self.map_wall,
            TileKind::HardLimit => self.map_hard_limit,
            TileKind::Room => self.map_room,
            TileKind::RoomWall => self.map_room_wall,
            TileKind::Corridor => self.map_corridor,
            TileKind::Water => self.map_water,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

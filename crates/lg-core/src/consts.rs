//! Default floor generation parameters
//!
//! These match the values the level grid has always shipped with.

/// Floor dimensions in tiles
pub const DEFAULT_FLOOR_WIDTH: i32 = 56;
pub const DEFAULT_FLOOR_HEIGHT: i32 = 32;

/// Coarse room grid dimensions (cells per axis)
pub const DEFAULT_ROOM_GRID_X: i32 = 3;
pub const DEFAULT_ROOM_GRID_Y: i32 = 2;

/// Real rooms generated is between `density` and `2 * density` (minimum 2)
pub const DEFAULT_ROOM_DENSITY: i32 = 2;

/// Room shape limits
pub const DEFAULT_MIN_ROOM_WIDTH: i32 = 5;
pub const DEFAULT_MIN_ROOM_HEIGHT: i32 = 4;
pub const DEFAULT_MIN_ROOM_RATIO: f32 = 0.666_667;

/// Corridor parameters
pub const DEFAULT_ROOM_LINK_CHANCE: f32 = 0.666_667;
pub const DEFAULT_DEAD_END_CHANCES: i32 = 3;
pub const DEFAULT_DEAD_END_TURN_CHANCE: f32 = 0.2;

/// Room count never drops below this, whatever the density
pub const MIN_ROOM_COUNT: i32 = 2;

/// Rejection sampling budget per real room, as a multiple of the cell count
pub const CELL_PICK_ATTEMPTS_PER_CELL: i32 = 32;

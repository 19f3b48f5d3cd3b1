//! Tile grid
//!
//! Coordinates, tile kinds and the tile map every generation step writes into.

mod coord;
mod tile;
mod tile_map;

pub use coord::Coordinate;
pub use tile::{Tile, TileKind};
pub use tile_map::TileMap;

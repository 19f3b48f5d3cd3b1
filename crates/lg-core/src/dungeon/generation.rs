//! Floor generation
//!
//! Runs every step in order: wall fill, hard borders, rooms, room walls,
//! corridors, dead ends. Only a finished level is ever returned.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::corridor::{RoomLink, generate_corridors};
use super::dead_end::generate_dead_ends;
use super::partition::partition_rooms;
use super::walls::{create_hard_borders, setup_room_wall_tiles};
use super::{LevelConfig, Room, RoomGridCoordinate};
use crate::error::LevelResult;
use crate::grid::{Coordinate, Tile, TileKind, TileMap};
use crate::rng::RandomSource;

/// A generated floor: the tile map plus the rooms and links that shaped it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    config: LevelConfig,
    tiles: TileMap,
    rooms: Vec<Room>,
    links: Vec<RoomLink>,
    dead_ends: usize,
}

impl Level {
    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn width(&self) -> i32 {
        self.tiles.width()
    }

    pub fn height(&self) -> i32 {
        self.tiles.height()
    }

    /// Tile at `coord`, or `None` off the floor
    pub fn tile_at(&self, coord: Coordinate) -> Option<&Tile> {
        self.tiles.try_get(coord)
    }

    /// Override a tile kind after generation (e.g. flooding with `Water`).
    /// Hard borders keep their kind.
    pub fn set_kind(&mut self, coord: Coordinate, kind: TileKind) -> LevelResult<()> {
        self.tiles.set_kind(coord, kind)
    }

    /// All rooms: real rooms in placement order, then dummy rooms
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn real_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| !r.is_dummy())
    }

    pub fn dummy_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|r| r.is_dummy())
    }

    pub fn room_at_grid(&self, grid: RoomGridCoordinate) -> Option<&Room> {
        self.rooms.iter().find(|r| r.grid() == grid)
    }

    /// Corridors carved between neighbouring rooms
    pub fn links(&self) -> &[RoomLink] {
        &self.links
    }

    /// Number of dead ends carved
    pub fn dead_ends(&self) -> usize {
        self.dead_ends
    }

    /// Center of the first room, a walkable tile to start exploring from
    pub fn spawn_point(&self) -> Coordinate {
        self.rooms
            .first()
            .map(Room::center)
            .unwrap_or_default()
    }

    pub fn render_ascii(&self) -> String {
        self.tiles.render_ascii()
    }
}

/// Generate a floor from `config`, drawing every random number from `rng`.
///
/// The same configuration and random stream always give the same level.
pub fn generate_level<R: RandomSource + ?Sized>(
    config: &LevelConfig,
    rng: &mut R,
) -> LevelResult<Level> {
    config.validate()?;

    let mut tiles = TileMap::new(config.floor_width, config.floor_height)?;
    create_hard_borders(&mut tiles)?;
    let rooms = partition_rooms(&mut tiles, config, rng)?;
    let room_walls = setup_room_wall_tiles(&mut tiles, &rooms)?;
    let links = generate_corridors(&mut tiles, config, &rooms, rng)?;
    let dead_ends = generate_dead_ends(&mut tiles, config, &rooms, rng)?;

    debug!(
        width = config.floor_width,
        height = config.floor_height,
        rooms = rooms.len(),
        room_walls,
        links = links.len(),
        dead_ends,
        "generated level"
    );

    Ok(Level {
        config: config.clone(),
        tiles,
        rooms,
        links,
        dead_ends,
    })
}

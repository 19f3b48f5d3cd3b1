//! Corridor generation between neighbouring room grid cells
//!
//! Each pair of horizontally or vertically adjacent cells is linked with
//! probability `room_link_chance`. A link is a three segment corridor:
//! out of the first room along its attachment row, across on a single
//! column between the rooms, then into the second room.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, trace};

use super::{LevelConfig, Room, RoomGridCoordinate};
use crate::error::{LevelError, LevelResult};
use crate::grid::{Coordinate, TileKind, TileMap};
use crate::rng::RandomSource;

/// Direction a corridor link runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum LinkAxis {
    /// From a cell to its right neighbour
    Horizontal,
    /// From a cell to its upper neighbour
    Vertical,
}

impl LinkAxis {
    /// Tile at position `along` on the link axis and `across` on the other
    fn coord(self, along: i32, across: i32) -> Coordinate {
        match self {
            LinkAxis::Horizontal => Coordinate::new(along, across),
            LinkAxis::Vertical => Coordinate::new(across, along),
        }
    }

    /// Start and length of the room along the link axis
    fn along(self, room: &Room) -> (i32, i32) {
        match self {
            LinkAxis::Horizontal => (room.left(), room.width()),
            LinkAxis::Vertical => (room.bottom(), room.height()),
        }
    }

    /// Start and length of the room across the link axis
    fn across(self, room: &Room) -> (i32, i32) {
        match self {
            LinkAxis::Horizontal => (room.bottom(), room.height()),
            LinkAxis::Vertical => (room.left(), room.width()),
        }
    }
}

/// A corridor carved between two rooms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomLink {
    pub from: RoomGridCoordinate,
    pub to: RoomGridCoordinate,
    pub axis: LinkAxis,
}

/// One room per room grid cell
#[derive(Debug, Clone)]
pub struct RoomIndex {
    by_grid: HashMap<RoomGridCoordinate, usize>,
}

impl RoomIndex {
    /// Index `rooms` by cell. Fails unless every cell of the room grid holds
    /// exactly one room.
    pub fn build(config: &LevelConfig, rooms: &[Room]) -> LevelResult<Self> {
        let mut by_grid = HashMap::with_capacity(rooms.len());
        for (idx, room) in rooms.iter().enumerate() {
            let grid = room.grid();
            if grid.x < 0
                || grid.y < 0
                || grid.x >= config.room_grid_x
                || grid.y >= config.room_grid_y
            {
                return Err(LevelError::invalid(format!(
                    "room at {} lies outside the {}x{} room grid",
                    grid, config.room_grid_x, config.room_grid_y
                )));
            }
            if by_grid.insert(grid, idx).is_some() {
                return Err(LevelError::invalid(format!(
                    "room grid cell {grid} holds more than one room"
                )));
            }
        }
        if by_grid.len() != config.cell_count() as usize {
            return Err(LevelError::invalid(format!(
                "{} of {} room grid cells have a room",
                by_grid.len(),
                config.cell_count()
            )));
        }
        Ok(Self { by_grid })
    }

    /// Index into the room list of the room in `grid`
    pub fn get(&self, grid: RoomGridCoordinate) -> Option<usize> {
        self.by_grid.get(&grid).copied()
    }

    fn room<'a>(&self, rooms: &'a [Room], grid: RoomGridCoordinate) -> LevelResult<&'a Room> {
        self.get(grid)
            .map(|idx| &rooms[idx])
            .ok_or_else(|| LevelError::invalid(format!("room grid cell {grid} has no room")))
    }
}

/// Link neighbouring rooms, left to right first, then bottom to top.
pub fn generate_corridors<R: RandomSource + ?Sized>(
    map: &mut TileMap,
    config: &LevelConfig,
    rooms: &[Room],
    rng: &mut R,
) -> LevelResult<Vec<RoomLink>> {
    let index = RoomIndex::build(config, rooms)?;
    let mut links = Vec::new();

    for gy in 0..config.room_grid_y {
        for gx in 0..config.room_grid_x - 1 {
            if rng.chance(config.room_link_chance) {
                let from = RoomGridCoordinate::new(gx, gy);
                let to = RoomGridCoordinate::new(gx + 1, gy);
                let link = RoomLink {
                    from,
                    to,
                    axis: LinkAxis::Horizontal,
                };
                carve_link(map, index.room(rooms, from)?, index.room(rooms, to)?, link.axis, rng)?;
                links.push(link);
            }
        }
    }

    for gx in 0..config.room_grid_x {
        for gy in 0..config.room_grid_y - 1 {
            if rng.chance(config.room_link_chance) {
                let from = RoomGridCoordinate::new(gx, gy);
                let to = RoomGridCoordinate::new(gx, gy + 1);
                let link = RoomLink {
                    from,
                    to,
                    axis: LinkAxis::Vertical,
                };
                carve_link(map, index.room(rooms, from)?, index.room(rooms, to)?, link.axis, rng)?;
                links.push(link);
            }
        }
    }

    debug!(links = links.len(), "generated corridors");
    Ok(links)
}

/// Carve a corridor from `first` to `second`, which lies further along `axis`.
///
/// Draws the crossing line between the rooms, then the attachment position
/// on each room. The last segment ends on the first row or column of
/// `second`.
pub fn carve_link<R: RandomSource + ?Sized>(
    map: &mut TileMap,
    first: &Room,
    second: &Room,
    axis: LinkAxis,
    rng: &mut R,
) -> LevelResult<()> {
    let (first_start, first_len) = axis.along(first);
    let (second_start, _) = axis.along(second);
    let first_end = first_start + first_len;

    let low = first_end + 1;
    let high = second_start - 1;
    if high <= low {
        return Err(LevelError::invalid(format!(
            "rooms in {} and {} are too close to link",
            first.grid(),
            second.grid()
        )));
    }
    let crossing = rng.range_i32(low, high);

    let (a_start, a_len) = axis.across(first);
    let (b_start, b_len) = axis.across(second);
    let first_across = rng.range_i32(a_start, a_start + a_len);
    let second_across = rng.range_i32(b_start, b_start + b_len);

    trace!(
        from = %first.grid(),
        to = %second.grid(),
        %axis,
        crossing,
        first_across,
        second_across,
        "carving corridor"
    );

    for along in first_end..=crossing {
        map.set_kind(axis.coord(along, first_across), TileKind::Corridor)?;
    }
    for across in first_across.min(second_across)..=first_across.max(second_across) {
        map.set_kind(axis.coord(crossing, across), TileKind::Corridor)?;
    }
    for along in crossing..=second_start {
        map.set_kind(axis.coord(along, second_across), TileKind::Corridor)?;
    }

    Ok(())
}

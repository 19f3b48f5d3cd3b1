//! Hard borders and room walls

use super::Room;
use crate::error::LevelResult;
use crate::grid::{Coordinate, TileKind, TileMap};

/// Turn the outermost ring of the floor into `HardLimit` tiles
pub fn create_hard_borders(map: &mut TileMap) -> LevelResult<()> {
    let (width, height) = (map.width(), map.height());
    for x in 0..width {
        map.set_kind(Coordinate::new(x, 0), TileKind::HardLimit)?;
        map.set_kind(Coordinate::new(x, height - 1), TileKind::HardLimit)?;
    }
    for y in 0..height {
        map.set_kind(Coordinate::new(0, y), TileKind::HardLimit)?;
        map.set_kind(Coordinate::new(width - 1, y), TileKind::HardLimit)?;
    }
    Ok(())
}

/// Mark the ring of tiles around every room as `RoomWall`.
///
/// Only plain `Wall` tiles are converted. Must run before corridors are
/// carved so corridors can cut through the ring. Returns the number of tiles
/// converted.
pub fn setup_room_wall_tiles(map: &mut TileMap, rooms: &[Room]) -> LevelResult<usize> {
    let mut painted = 0;
    for room in rooms {
        for x in room.left() - 1..=room.right() {
            painted += mark_room_wall(map, Coordinate::new(x, room.bottom() - 1))? as usize;
            painted += mark_room_wall(map, Coordinate::new(x, room.top()))? as usize;
        }
        for y in room.bottom()..room.top() {
            painted += mark_room_wall(map, Coordinate::new(room.left() - 1, y))? as usize;
            painted += mark_room_wall(map, Coordinate::new(room.right(), y))? as usize;
        }
    }
    Ok(painted)
}

fn mark_room_wall(map: &mut TileMap, coord: Coordinate) -> LevelResult<bool> {
    if map.kind(coord)? != TileKind::Wall {
        return Ok(false);
    }
    map.set_kind(coord, TileKind::RoomWall)?;
    Ok(true)
}

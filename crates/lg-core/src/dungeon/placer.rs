//! Room placement inside a room grid cell

use tracing::trace;

use super::{LevelConfig, Room, RoomGridCoordinate};
use crate::error::{LevelError, LevelResult};
use crate::grid::Coordinate;
use crate::rng::RandomSource;

/// Compute the rectangle of the room for one room grid cell.
///
/// Every room draws width, height, then the x and y offsets inside the cell.
/// Dummy rooms throw the drawn size away and are 1x1. The offset range
/// starts at 1, leaving at least one wall tile on the low side of the cell.
pub fn place_room<R: RandomSource + ?Sized>(
    config: &LevelConfig,
    grid: RoomGridCoordinate,
    dummy: bool,
    rng: &mut R,
) -> LevelResult<Room> {
    let (width, height) = draw_room_size(config, rng)?;
    let (width, height) = if dummy {
        (1, 1)
    } else {
        reshape(config, width, height)
    };

    let cell_width = config.cell_width();
    let cell_height = config.cell_height();
    let x = cell_width * grid.x + cell_offset(cell_width, width, grid, rng)?;
    let y = cell_height * grid.y + cell_offset(cell_height, height, grid, rng)?;

    trace!(%grid, x, y, width, height, dummy, "placed room");
    Ok(Room::new(Coordinate::new(x, y), width, height, grid, dummy))
}

/// Draw a room's width and height.
///
/// The height draw uses `min_room_width` as its lower bound as well;
/// `min_room_height` only limits the reshaping.
fn draw_room_size<R: RandomSource + ?Sized>(
    config: &LevelConfig,
    rng: &mut R,
) -> LevelResult<(i32, i32)> {
    let max_width = config.cell_width() - 2;
    let max_height = config.cell_height() - 2;
    if config.min_room_width >= max_width || config.min_room_width >= max_height {
        return Err(LevelError::invalid(format!(
            "no room size fits in a {}x{} room grid cell",
            config.cell_width(),
            config.cell_height()
        )));
    }

    let width = rng.range_i32(config.min_room_width, max_width);
    let height = rng.range_i32(config.min_room_width, max_height);
    Ok((width, height))
}

/// Lower a room that is too narrow, then widen it until the ratio holds
fn reshape(config: &LevelConfig, mut width: i32, mut height: i32) -> (i32, i32) {
    let ratio = |w: i32, h: i32| w as f32 / h as f32;
    if ratio(width, height) < config.min_room_ratio {
        while height > config.min_room_height && ratio(width, height) < config.min_room_ratio {
            height -= 1;
        }
        while ratio(width, height) < config.min_room_ratio {
            width += 1;
        }
    }
    (width, height)
}

/// Offset of a room of `size` tiles inside a cell of `cell_size` tiles
fn cell_offset<R: RandomSource + ?Sized>(
    cell_size: i32,
    size: i32,
    grid: RoomGridCoordinate,
    rng: &mut R,
) -> LevelResult<i32> {
    let high = cell_size - size - 1;
    if high <= 1 {
        return Err(LevelError::invalid(format!(
            "room of size {size} does not fit in room grid cell {grid} ({cell_size} tiles)"
        )));
    }
    Ok(rng.range_i32(1, high))
}

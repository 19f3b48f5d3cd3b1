//! Room grid partitioning: which cells get a real room and which a dummy

use tracing::debug;

use super::{LevelConfig, Room, RoomGridCoordinate, place_room};
use crate::consts::{CELL_PICK_ATTEMPTS_PER_CELL, MIN_ROOM_COUNT};
use crate::error::{LevelError, LevelResult};
use crate::grid::{TileKind, TileMap};
use crate::rng::RandomSource;

/// Number of real rooms to place.
///
/// A density below 2 always gives 2 rooms without drawing; otherwise
/// `density * [1, 2]` rounded half to even. Never more than the cell count.
pub fn target_room_count<R: RandomSource + ?Sized>(config: &LevelConfig, rng: &mut R) -> i32 {
    let count = if config.room_density < MIN_ROOM_COUNT {
        MIN_ROOM_COUNT
    } else {
        (config.room_density as f32 * rng.range_f32(1.0, 2.0)).round_ties_even() as i32
    };
    count.min(config.cell_count()).max(MIN_ROOM_COUNT)
}

/// Place one room in every room grid cell and carve their footprints.
///
/// Real rooms come first in selection order, then dummy rooms for the
/// remaining cells, row by row from the bottom.
pub fn partition_rooms<R: RandomSource + ?Sized>(
    map: &mut TileMap,
    config: &LevelConfig,
    rng: &mut R,
) -> LevelResult<Vec<Room>> {
    let target = target_room_count(config, rng);
    let mut chosen: Vec<RoomGridCoordinate> = Vec::with_capacity(target as usize);
    let mut rooms = Vec::with_capacity(config.cell_count().max(0) as usize);

    for _ in 0..target {
        let grid = pick_free_cell(config, &chosen, rng)?;
        chosen.push(grid);

        let room = place_room(config, grid, false, rng)?;
        for coord in room.tiles() {
            map.set_kind(coord, TileKind::Room)?;
        }
        rooms.push(room);
    }

    for gy in 0..config.room_grid_y {
        for gx in 0..config.room_grid_x {
            let grid = RoomGridCoordinate::new(gx, gy);
            if chosen.contains(&grid) {
                continue;
            }
            let room = place_room(config, grid, true, rng)?;
            map.set_kind(room.origin(), TileKind::Room)?;
            rooms.push(room);
        }
    }

    debug!(
        real = target,
        dummy = rooms.len() as i32 - target,
        "partitioned room grid"
    );
    Ok(rooms)
}

/// Draw cells until one without a room comes up
fn pick_free_cell<R: RandomSource + ?Sized>(
    config: &LevelConfig,
    chosen: &[RoomGridCoordinate],
    rng: &mut R,
) -> LevelResult<RoomGridCoordinate> {
    let attempts = config.cell_count().saturating_mul(CELL_PICK_ATTEMPTS_PER_CELL);
    for _ in 0..attempts {
        let grid = RoomGridCoordinate::new(
            rng.range_i32(0, config.room_grid_x),
            rng.range_i32(0, config.room_grid_y),
        );
        if !chosen.contains(&grid) {
            return Ok(grid);
        }
    }
    Err(LevelError::invalid(format!(
        "no free room grid cell found after {attempts} draws ({} of {} taken)",
        chosen.len(),
        config.cell_count()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Coordinate;
    use crate::rng::{LevelRng, ScriptedRng};

    fn small_config() -> LevelConfig {
        // 2x2 grid of 18x16 cells
        LevelConfig {
            floor_width: 36,
            floor_height: 32,
            room_grid_x: 2,
            room_grid_y: 2,
            ..LevelConfig::default()
        }
    }

    #[test]
    fn test_target_room_count_low_density() {
        let config = LevelConfig {
            room_density: 0,
            ..LevelConfig::default()
        };
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(target_room_count(&config, &mut rng), 2);
    }

    #[test]
    fn test_target_room_count_rounds_half_to_even() {
        let config = LevelConfig {
            room_density: 3,
            ..LevelConfig::default()
        };
        // 3 * 1.5 = 4.5 rounds to 4
        let mut rng = ScriptedRng::new(&[], &[1.5]);
        assert_eq!(target_room_count(&config, &mut rng), 4);
        // 3 * 2.0 = 6, the cell count
        let mut rng = ScriptedRng::new(&[], &[2.0]);
        assert_eq!(target_room_count(&config, &mut rng), 6);
    }

    #[test]
    fn test_target_room_count_capped_by_cells() {
        let config = LevelConfig {
            room_density: 10,
            ..LevelConfig::default()
        };
        let mut rng = ScriptedRng::new(&[], &[1.0]);
        assert_eq!(target_room_count(&config, &mut rng), 6);
    }

    #[test]
    fn test_partition_skips_taken_cells() {
        let config = small_config();
        let mut map = TileMap::new(config.floor_width, config.floor_height).unwrap();
        // Room count 2 * 1.0 = 2
        // Room 1: cell (1, 0), size 5x5, offsets 1, 1
        // Room 2: cell (1, 0) again is rejected, then cell (0, 1), size 6x5, offsets 2, 3
        // Dummies: (0, 0) discarded size 7x8, offsets 4, 5
        // then (1, 1) discarded size 9x6, offsets 6, 7
        let mut rng = ScriptedRng::new(
            &[1, 0, 5, 5, 1, 1, 1, 0, 0, 1, 6, 5, 2, 3, 7, 8, 4, 5, 9, 6, 6, 7],
            &[1.0],
        );
        let rooms = partition_rooms(&mut map, &config, &mut rng).unwrap();
        assert!(rng.is_exhausted());

        let grids: Vec<_> = rooms.iter().map(|r| (r.grid(), r.is_dummy())).collect();
        assert_eq!(
            grids,
            vec![
                (RoomGridCoordinate::new(1, 0), false),
                (RoomGridCoordinate::new(0, 1), false),
                (RoomGridCoordinate::new(0, 0), true),
                (RoomGridCoordinate::new(1, 1), true),
            ]
        );
        assert_eq!(rooms[0].origin(), Coordinate::new(19, 1));
        assert_eq!(rooms[1].origin(), Coordinate::new(2, 19));
        assert_eq!(rooms[2].origin(), Coordinate::new(4, 5));
        assert_eq!(rooms[3].origin(), Coordinate::new(24, 23));

        assert_eq!(map.count(TileKind::Room), 25 + 30 + 1 + 1);
        for room in &rooms {
            assert!(room.tiles().all(|c| map.kind(c) == Ok(TileKind::Room)));
        }
    }

    #[test]
    fn test_partition_covers_every_cell() {
        let config = LevelConfig {
            room_density: 3,
            ..LevelConfig::default()
        };
        for seed in 0..20 {
            let mut map = TileMap::new(config.floor_width, config.floor_height).unwrap();
            let mut rng = LevelRng::new(seed);
            let rooms = partition_rooms(&mut map, &config, &mut rng).unwrap();
            assert_eq!(rooms.len(), config.cell_count() as usize);

            let mut grids: Vec<_> = rooms.iter().map(Room::grid).collect();
            grids.sort();
            grids.dedup();
            assert_eq!(grids.len(), rooms.len());
        }
    }

    #[test]
    fn test_pick_free_cell_gives_up() {
        let config = small_config();
        let chosen = [
            RoomGridCoordinate::new(0, 0),
            RoomGridCoordinate::new(1, 0),
            RoomGridCoordinate::new(0, 1),
            RoomGridCoordinate::new(1, 1),
        ];
        let mut rng = LevelRng::new(3);
        assert!(matches!(
            pick_free_cell(&config, &chosen, &mut rng),
            Err(LevelError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_pick_free_cell_attempts_saturate() {
        // 2^27 cells: 32 draws per cell would overflow i32
        let config = LevelConfig {
            room_grid_x: 1 << 27,
            room_grid_y: 1,
            ..LevelConfig::default()
        };
        let mut rng = ScriptedRng::new(&[7, 0], &[]);
        assert_eq!(
            pick_free_cell(&config, &[], &mut rng),
            Ok(RoomGridCoordinate::new(7, 0))
        );
    }
}

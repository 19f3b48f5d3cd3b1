//! Dead-end branches
//!
//! A dead end leaves a random room through one of its walls and keeps
//! digging through plain wall, turning now and then, until the next tile is
//! anything other than `Wall`.

use tracing::{debug, trace};

use super::{LevelConfig, Room};
use crate::error::LevelResult;
use crate::grid::{Coordinate, TileKind, TileMap};
use crate::rng::RandomSource;

/// Side of a room a dead end leaves from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    East,
    West,
    South,
    North,
}

impl Side {
    const ALL: [Side; 4] = [Side::East, Side::West, Side::South, Side::North];
}

/// Unit step of a dead-end walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Heading {
    dx: i32,
    dy: i32,
}

impl Heading {
    /// Quarter turn: swap the components, then flip both unless `keep_sign`
    fn turned(self, keep_sign: bool) -> Self {
        let sign = if keep_sign { 1 } else { -1 };
        Self {
            dx: self.dy * sign,
            dy: self.dx * sign,
        }
    }
}

/// Number of dead ends for a run: `[chances, 2 * chances)`, none for zero.
/// The upper bound saturates at `i32::MAX`.
pub fn dead_end_count<R: RandomSource + ?Sized>(config: &LevelConfig, rng: &mut R) -> i32 {
    if config.dead_end_chances <= 0 {
        return 0;
    }
    rng.range_i32(config.dead_end_chances, config.dead_end_chances.saturating_mul(2))
}

/// Branch dead ends off random rooms. Returns the number actually carved.
pub fn generate_dead_ends<R: RandomSource + ?Sized>(
    map: &mut TileMap,
    config: &LevelConfig,
    rooms: &[Room],
    rng: &mut R,
) -> LevelResult<usize> {
    if rooms.is_empty() {
        return Ok(0);
    }

    let count = dead_end_count(config, rng);
    let mut carved = 0;
    for _ in 0..count {
        let room = &rooms[rng.index(rooms.len())];
        let (start, heading) = starting_point(room, rng);
        if carve_dead_end(map, start, heading, config.dead_end_turn_chance, rng)? {
            carved += 1;
        }
    }

    debug!(requested = count, carved, "generated dead ends");
    Ok(carved)
}

/// Pick a side, then a tile of the room along that side
fn starting_point<R: RandomSource + ?Sized>(room: &Room, rng: &mut R) -> (Coordinate, Heading) {
    let side = Side::ALL[rng.index(Side::ALL.len())];
    match side {
        Side::East => (
            Coordinate::new(room.right() - 1, room.bottom() + rng.range_i32(0, room.height())),
            Heading { dx: 1, dy: 0 },
        ),
        Side::West => (
            Coordinate::new(room.left(), room.bottom() + rng.range_i32(0, room.height())),
            Heading { dx: -1, dy: 0 },
        ),
        Side::South => (
            Coordinate::new(room.left() + rng.range_i32(0, room.width()), room.bottom()),
            Heading { dx: 0, dy: -1 },
        ),
        Side::North => (
            Coordinate::new(room.left() + rng.range_i32(0, room.width()), room.top() - 1),
            Heading { dx: 0, dy: 1 },
        ),
    }
}

/// Walk out of a room from `start`.
///
/// The first step opens the room's wall ring whatever it holds, unless it is
/// a hard border, in which case nothing is carved and `false` is returned.
/// Every later step only goes on into `Wall` tiles. Each step turns with
/// probability `turn_chance`, left or right with equal odds.
fn carve_dead_end<R: RandomSource + ?Sized>(
    map: &mut TileMap,
    start: Coordinate,
    mut heading: Heading,
    turn_chance: f32,
    rng: &mut R,
) -> LevelResult<bool> {
    let mut target = start.offset(heading.dx, heading.dy);
    if map.kind(target)? == TileKind::HardLimit {
        trace!(%start, "dead end blocked by the floor border");
        return Ok(false);
    }

    let mut length = 0;
    loop {
        map.set_kind(target, TileKind::Corridor)?;
        length += 1;

        if rng.chance(turn_chance) {
            heading = heading.turned(rng.chance(0.5));
        }

        target = target.offset(heading.dx, heading.dy);
        if map.kind(target)? != TileKind::Wall {
            break;
        }
    }

    trace!(%start, length, "carved dead end");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::RoomGridCoordinate;
    use crate::dungeon::walls::{create_hard_borders, setup_room_wall_tiles};
    use crate::error::LevelError;
    use crate::rng::{LevelRng, ScriptedRng};

    fn room(x: i32, y: i32, width: i32, height: i32) -> Room {
        Room::new(
            Coordinate::new(x, y),
            width,
            height,
            RoomGridCoordinate::new(0, 0),
            false,
        )
    }

    fn floor_with(rooms: &[Room], width: i32, height: i32) -> TileMap {
        let mut map = TileMap::new(width, height).unwrap();
        create_hard_borders(&mut map).unwrap();
        for r in rooms {
            for c in r.tiles() {
                map.set_kind(c, TileKind::Room).unwrap();
            }
        }
        setup_room_wall_tiles(&mut map, rooms).unwrap();
        map
    }

    #[test]
    fn test_heading_turns() {
        let east = Heading { dx: 1, dy: 0 };
        assert_eq!(east.turned(true), Heading { dx: 0, dy: 1 });
        assert_eq!(east.turned(false), Heading { dx: 0, dy: -1 });
        let north = Heading { dx: 0, dy: 1 };
        assert_eq!(north.turned(true), Heading { dx: 1, dy: 0 });
        assert_eq!(north.turned(false), Heading { dx: -1, dy: 0 });
    }

    #[test]
    fn test_dead_end_count_range() {
        let none = LevelConfig {
            dead_end_chances: 0,
            ..LevelConfig::default()
        };
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(dead_end_count(&none, &mut rng), 0);

        let config = LevelConfig {
            dead_end_chances: 3,
            ..LevelConfig::default()
        };
        let mut rng = LevelRng::new(11);
        for _ in 0..100 {
            assert!((3..6).contains(&dead_end_count(&config, &mut rng)));
        }
    }

    #[test]
    fn test_dead_end_count_huge_chances() {
        let config = LevelConfig {
            dead_end_chances: 1_500_000_000,
            ..LevelConfig::default()
        };
        assert!(config.validate().is_ok());
        let mut rng = LevelRng::new(4);
        for _ in 0..20 {
            assert!(dead_end_count(&config, &mut rng) >= 1_500_000_000);
        }
    }

    #[test]
    fn test_straight_dead_end_stops_at_border() {
        let r = room(3, 3, 3, 3);
        let mut map = floor_with(&[r], 20, 10);
        // East side, row offset 1, never turns
        let mut rng = ScriptedRng::new(&[0, 1], &[0.9; 20]);
        let (start, heading) = starting_point(&r, &mut rng);
        assert_eq!(start, Coordinate::new(5, 4));
        let carved = carve_dead_end(&mut map, start, heading, 0.2, &mut rng).unwrap();
        assert!(carved);
        // Ring tile at x = 6 through x = 18, stopping before the border
        for x in 6..=18 {
            assert_eq!(map.kind(Coordinate::new(x, 4)), Ok(TileKind::Corridor), "x = {x}");
        }
        assert_eq!(map.kind(Coordinate::new(19, 4)), Ok(TileKind::HardLimit));
        assert_eq!(map.count(TileKind::Corridor), 13);
    }

    #[test]
    fn test_dead_end_turns_and_stops_at_room_wall() {
        let r = room(3, 3, 3, 3);
        let other = room(12, 6, 3, 3);
        let mut map = floor_with(&[r, other], 20, 12);
        // North side from column 4: up through the ring at y = 6, turn right
        // (keep sign) at y = 7, then east until the other room's ring
        let mut rng = ScriptedRng::new(&[3, 1], &[0.9, 0.1, 0.3, 0.9, 0.9, 0.9, 0.9, 0.9, 0.9]);
        let (start, heading) = starting_point(&r, &mut rng);
        assert_eq!(start, Coordinate::new(4, 5));
        carve_dead_end(&mut map, start, heading, 0.2, &mut rng).unwrap();

        assert_eq!(map.kind(Coordinate::new(4, 6)), Ok(TileKind::Corridor));
        assert_eq!(map.kind(Coordinate::new(4, 7)), Ok(TileKind::Corridor));
        for x in 5..=10 {
            assert_eq!(map.kind(Coordinate::new(x, 7)), Ok(TileKind::Corridor), "x = {x}");
        }
        assert_eq!(map.kind(Coordinate::new(11, 7)), Ok(TileKind::RoomWall));
        assert_eq!(map.count(TileKind::Corridor), 8);
    }

    #[test]
    fn test_dead_end_blocked_by_border() {
        let r = room(1, 3, 3, 3);
        let mut map = floor_with(&[r], 10, 10);
        // West side: the ring column is the border itself
        let mut rng = ScriptedRng::new(&[1, 0], &[]);
        let (start, heading) = starting_point(&r, &mut rng);
        let carved = carve_dead_end(&mut map, start, heading, 0.5, &mut rng).unwrap();
        assert!(!carved);
        assert!(rng.is_exhausted());
        assert_eq!(map.count(TileKind::Corridor), 0);
    }

    #[test]
    fn test_dead_end_without_border_fails_out_of_bounds() {
        let r = room(2, 2, 2, 2);
        let mut map = TileMap::new(8, 6).unwrap();
        for c in r.tiles() {
            map.set_kind(c, TileKind::Room).unwrap();
        }
        let mut rng = ScriptedRng::new(&[], &[0.9; 8]);
        let east = Heading { dx: 1, dy: 0 };
        let err = carve_dead_end(&mut map, Coordinate::new(3, 2), east, 0.2, &mut rng);
        assert_eq!(err, Err(LevelError::OutOfBounds(Coordinate::new(8, 2))));
    }

    #[test]
    fn test_generate_dead_ends_none_requested() {
        let r = room(3, 3, 3, 3);
        let mut map = floor_with(&[r], 20, 10);
        let config = LevelConfig {
            dead_end_chances: 0,
            ..LevelConfig::default()
        };
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(generate_dead_ends(&mut map, &config, &[r], &mut rng), Ok(0));
        assert_eq!(map.count(TileKind::Corridor), 0);
    }
}

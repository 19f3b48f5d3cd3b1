//! Walking over a generated level
//!
//! An [`Explorer`] moves one tile at a time, in any of eight directions, and
//! only onto walkable tiles (`Room` or `Corridor`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::dungeon::Level;
use crate::grid::Coordinate;

/// Step direction. North is towards higher `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }
}

/// A single walker on the floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explorer {
    position: Coordinate,
}

impl Explorer {
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }

    /// Start on the level's spawn point
    pub fn spawn(level: &Level) -> Self {
        Self::new(level.spawn_point())
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Try to move by `(dx, dy)`; each component is clamped to `[-1, 1]`.
    ///
    /// Returns true if the explorer moved. A zero step, a target off the
    /// floor or a non-walkable target leaves it where it is.
    pub fn try_step(&mut self, level: &Level, dx: i32, dy: i32) -> bool {
        let (dx, dy) = (dx.clamp(-1, 1), dy.clamp(-1, 1));
        if dx == 0 && dy == 0 {
            return false;
        }

        let target = self.position.offset(dx, dy);
        match level.tile_at(target) {
            Some(tile) if tile.kind().is_walkable() => {
                self.position = target;
                true
            }
            _ => false,
        }
    }

    pub fn try_move(&mut self, level: &Level, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.try_step(level, dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{LevelConfig, generate_level};
    use crate::grid::TileKind;
    use crate::rng::LevelRng;
    use strum::IntoEnumIterator;

    fn level(seed: u64) -> Level {
        generate_level(&LevelConfig::default(), &mut LevelRng::new(seed)).unwrap()
    }

    #[test]
    fn test_zero_step_does_nothing() {
        let level = level(1);
        let mut explorer = Explorer::spawn(&level);
        let start = explorer.position();
        assert!(!explorer.try_step(&level, 0, 0));
        assert_eq!(explorer.position(), start);
    }

    #[test]
    fn test_never_leaves_walkable_tiles() {
        for seed in 0..5 {
            let level = level(seed);
            let mut explorer = Explorer::spawn(&level);
            let mut rng = LevelRng::new(seed + 100);
            let directions: Vec<_> = Direction::iter().collect();
            for _ in 0..500 {
                let dir = directions[crate::RandomSource::index(&mut rng, directions.len())];
                explorer.try_move(&level, dir);
                let kind = level.tile_at(explorer.position()).map(|t| t.kind());
                assert!(matches!(kind, Some(TileKind::Room | TileKind::Corridor)));
            }
        }
    }

    #[test]
    fn test_step_is_clamped() {
        let level = level(2);
        let room = level.real_rooms().next().unwrap();
        let mut explorer = Explorer::new(room.origin());
        if room.width() > 1 {
            assert!(explorer.try_step(&level, 5, 0));
            assert_eq!(explorer.position(), room.origin().offset(1, 0));
        }
    }

    #[test]
    fn test_blocked_by_room_wall() {
        let level = level(4);
        let room = *level.real_rooms().next().unwrap();
        let mut explorer = Explorer::new(room.origin());
        let below = room.origin().offset(0, -1);
        let moved = explorer.try_move(&level, Direction::South);
        let walkable = level.tile_at(below).unwrap().kind().is_walkable();
        assert_eq!(moved, walkable);
    }
}

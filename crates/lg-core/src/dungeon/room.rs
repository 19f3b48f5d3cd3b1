//! Rooms and room grid cells

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::grid::Coordinate;

/// Cell of the coarse room grid. Separate index space from [`Coordinate`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct RoomGridCoordinate {
    pub x: i32,
    pub y: i32,
}

impl RoomGridCoordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for RoomGridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// Rectangle of room tiles placed inside one room grid cell.
///
/// Dummy rooms are 1x1 placeholders for cells without a real room, so that
/// every cell of the room grid has exactly one room to link corridors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    origin: Coordinate,
    width: i32,
    height: i32,
    grid: RoomGridCoordinate,
    dummy: bool,
}

impl Room {
    pub(crate) fn new(
        origin: Coordinate,
        width: i32,
        height: i32,
        grid: RoomGridCoordinate,
        dummy: bool,
    ) -> Self {
        Self {
            origin,
            width,
            height,
            grid,
            dummy,
        }
    }

    /// Bottom-left tile of the room
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Room grid cell holding this room
    pub fn grid(&self) -> RoomGridCoordinate {
        self.grid
    }

    pub fn is_dummy(&self) -> bool {
        self.dummy
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    /// First column past the room
    pub fn right(&self) -> i32 {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y
    }

    /// First row past the room
    pub fn top(&self) -> i32 {
        self.origin.y + self.height
    }

    pub fn center(&self) -> Coordinate {
        self.origin.offset(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= self.left()
            && coord.x < self.right()
            && coord.y >= self.bottom()
            && coord.y < self.top()
    }

    /// Every tile of the room footprint, row by row
    pub fn tiles(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.bottom()..self.top())
            .flat_map(move |y| (self.left()..self.right()).map(move |x| Coordinate::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_bounds() {
        let room = Room::new(
            Coordinate::new(2, 3),
            4,
            5,
            RoomGridCoordinate::new(0, 1),
            false,
        );
        assert_eq!(room.right(), 6);
        assert_eq!(room.top(), 8);
        assert_eq!(room.center(), Coordinate::new(4, 5));
        assert!(room.contains(Coordinate::new(2, 3)));
        assert!(room.contains(Coordinate::new(5, 7)));
        assert!(!room.contains(Coordinate::new(6, 7)));
        assert!(!room.contains(Coordinate::new(5, 8)));
    }

    #[test]
    fn test_room_tiles() {
        let room = Room::new(
            Coordinate::new(1, 1),
            3,
            2,
            RoomGridCoordinate::new(0, 0),
            false,
        );
        let tiles: Vec<_> = room.tiles().collect();
        assert_eq!(tiles.len(), 6);
        assert!(tiles.iter().all(|&c| room.contains(c)));
    }

    #[test]
    fn test_dummy_room_single_tile() {
        let room = Room::new(
            Coordinate::new(7, 9),
            1,
            1,
            RoomGridCoordinate::new(1, 0),
            true,
        );
        assert!(room.is_dummy());
        assert_eq!(room.tiles().collect::<Vec<_>>(), vec![Coordinate::new(7, 9)]);
        assert_eq!(room.center(), room.origin());
    }
}

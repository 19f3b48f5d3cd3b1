//! Tile kinds and tiles

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::Coordinate;

/// Terrain kind of a tile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TileKind {
    /// Solid rock, the kind every tile starts as
    #[default]
    Wall = 0,
    /// Outer border of the floor. Never changes once set.
    HardLimit = 1,
    /// Walkable room interior
    Room = 2,
    /// Wall tile directly around a room
    RoomWall = 3,
    /// Walkable link between rooms
    Corridor = 4,
    /// Not produced by the generator, may be set by callers
    Water = 5,
}

impl TileKind {
    /// Check if this is passable (can walk through)
    pub const fn is_walkable(&self) -> bool {
        matches!(self, TileKind::Room | TileKind::Corridor)
    }

    /// Check if this blocks movement like rock does
    pub const fn is_solid(&self) -> bool {
        matches!(
            self,
            TileKind::Wall | TileKind::HardLimit | TileKind::RoomWall
        )
    }

    /// Get the display character for this tile kind
    pub const fn symbol(&self) -> char {
        match self {
            TileKind::Wall => '#',
            TileKind::HardLimit => ' ',
            TileKind::Room => '.',
            TileKind::RoomWall => '+',
            TileKind::Corridor => ':',
            TileKind::Water => '~',
        }
    }
}

/// A single floor tile. The coordinate is fixed at creation; the kind is
/// changed only through [`TileMap::set_kind`](super::TileMap::set_kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    coordinate: Coordinate,
    kind: TileKind,
}

impl Tile {
    pub(crate) const fn new(coordinate: Coordinate, kind: TileKind) -> Self {
        Self { coordinate, kind }
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn kind(&self) -> TileKind {
        self.kind
    }

    /// Change the kind. A `HardLimit` tile ignores the request.
    pub(crate) fn set_kind(&mut self, kind: TileKind) {
        if self.kind == TileKind::HardLimit {
            return;
        }
        self.kind = kind;
    }
}

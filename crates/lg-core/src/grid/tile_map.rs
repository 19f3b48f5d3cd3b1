//! Tile map: one tile per coordinate of the floor rectangle

use serde::{Deserialize, Serialize};

use super::{Coordinate, Tile, TileKind};
use crate::error::{LevelError, LevelResult};

/// Mutable 2-D grid of tiles covering `[0, width) x [0, height)`.
///
/// Tiles are stored row by row starting from `y = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileMap {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map where every tile is [`TileKind::Wall`]
    pub fn new(width: i32, height: i32) -> LevelResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(LevelError::invalid(format!(
                "floor size must be positive, got {width}x{height}"
            )));
        }

        let count = width.checked_mul(height).ok_or_else(|| {
            LevelError::invalid(format!("floor of {width}x{height} tiles is too large"))
        })?;

        let mut tiles = Vec::with_capacity(count as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(Tile::new(Coordinate::new(x, y), TileKind::Wall));
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if the coordinate lies on the floor
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: Coordinate) -> LevelResult<usize> {
        if !self.contains(coord) {
            return Err(LevelError::OutOfBounds(coord));
        }
        Ok((coord.y * self.width + coord.x) as usize)
    }

    /// Tile at `coord`, failing with `OutOfBounds` off the floor
    pub fn get(&self, coord: Coordinate) -> LevelResult<&Tile> {
        let idx = self.index(coord)?;
        Ok(&self.tiles[idx])
    }

    /// Tile at `coord`, or `None` off the floor
    pub fn try_get(&self, coord: Coordinate) -> Option<&Tile> {
        self.index(coord).ok().map(|idx| &self.tiles[idx])
    }

    /// Kind of the tile at `coord`
    pub fn kind(&self, coord: Coordinate) -> LevelResult<TileKind> {
        self.get(coord).map(Tile::kind)
    }

    /// Set the kind of the tile at `coord`.
    ///
    /// Silently keeps `HardLimit` tiles as they are; only coordinates off the
    /// floor are an error.
    pub fn set_kind(&mut self, coord: Coordinate, kind: TileKind) -> LevelResult<()> {
        let idx = self.index(coord)?;
        self.tiles[idx].set_kind(kind);
        Ok(())
    }

    /// All tiles, row by row from the bottom
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles of the given kind
    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|t| t.kind() == kind).count()
    }

    /// Render as text, one line per row with the highest `y` first
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height) as usize);
        for row in self.tiles.chunks(self.width as usize).rev() {
            out.extend(row.iter().map(|t| t.kind().symbol()));
            out.push('\n');
        }
        out
    }
}

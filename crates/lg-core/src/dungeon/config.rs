//! Floor generation parameters

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{LevelError, LevelResult};

/// Parameters of one floor generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub floor_width: i32,
    pub floor_height: i32,

    /// Number of room grid cells along x
    pub room_grid_x: i32,
    /// Number of room grid cells along y
    pub room_grid_y: i32,

    /// Between `density` and `2 * density` real rooms (at least 2)
    pub room_density: i32,
    /// Lower bound of both room width and room height draws
    pub min_room_width: i32,
    /// Floor for the height reduction when fixing a too narrow room
    pub min_room_height: i32,
    /// Minimum width / height ratio of a real room
    pub min_room_ratio: f32,

    /// Probability of linking two neighbouring room grid cells
    pub room_link_chance: f32,
    /// Between `dead_end_chances` and `2 * dead_end_chances - 1` dead ends
    pub dead_end_chances: i32,
    /// Probability of a 90 degree turn at each dead end step
    pub dead_end_turn_chance: f32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            floor_width: DEFAULT_FLOOR_WIDTH,
            floor_height: DEFAULT_FLOOR_HEIGHT,
            room_grid_x: DEFAULT_ROOM_GRID_X,
            room_grid_y: DEFAULT_ROOM_GRID_Y,
            room_density: DEFAULT_ROOM_DENSITY,
            min_room_width: DEFAULT_MIN_ROOM_WIDTH,
            min_room_height: DEFAULT_MIN_ROOM_HEIGHT,
            min_room_ratio: DEFAULT_MIN_ROOM_RATIO,
            room_link_chance: DEFAULT_ROOM_LINK_CHANCE,
            dead_end_chances: DEFAULT_DEAD_END_CHANCES,
            dead_end_turn_chance: DEFAULT_DEAD_END_TURN_CHANCE,
        }
    }
}

impl LevelConfig {
    /// Width in tiles of one room grid cell
    pub fn cell_width(&self) -> i32 {
        self.floor_width / self.room_grid_x
    }

    /// Height in tiles of one room grid cell
    pub fn cell_height(&self) -> i32 {
        self.floor_height / self.room_grid_y
    }

    /// Number of room grid cells, saturating at `i32::MAX`
    pub fn cell_count(&self) -> i32 {
        self.room_grid_x.saturating_mul(self.room_grid_y)
    }

    /// Check every parameter and the preconditions that can be known before
    /// drawing anything.
    pub fn validate(&self) -> LevelResult<()> {
        if self.floor_width <= 0 || self.floor_height <= 0 {
            return Err(LevelError::invalid(format!(
                "floor size must be positive, got {}x{}",
                self.floor_width, self.floor_height
            )));
        }
        if self.room_grid_x < 1 || self.room_grid_y < 1 {
            return Err(LevelError::invalid(format!(
                "room grid needs at least one cell per axis, got {}x{}",
                self.room_grid_x, self.room_grid_y
            )));
        }
        if self.floor_width.checked_mul(self.floor_height).is_none() {
            return Err(LevelError::invalid(format!(
                "floor of {}x{} tiles is too large",
                self.floor_width, self.floor_height
            )));
        }
        if self.room_grid_x.checked_mul(self.room_grid_y).is_none() {
            return Err(LevelError::invalid(format!(
                "room grid of {}x{} cells is too large",
                self.room_grid_x, self.room_grid_y
            )));
        }
        if self.cell_count() < MIN_ROOM_COUNT {
            return Err(LevelError::invalid(format!(
                "room grid must have at least {MIN_ROOM_COUNT} cells, got {}",
                self.cell_count()
            )));
        }
        if self.min_room_width <= 0 || self.min_room_height <= 0 {
            return Err(LevelError::invalid(format!(
                "minimum room size must be positive, got {}x{}",
                self.min_room_width, self.min_room_height
            )));
        }
        if !(self.min_room_ratio > 0.0 && self.min_room_ratio.is_finite()) {
            return Err(LevelError::invalid(format!(
                "minimum room ratio must be positive, got {}",
                self.min_room_ratio
            )));
        }
        if self.room_density < 0 {
            return Err(LevelError::invalid(format!(
                "room density must not be negative, got {}",
                self.room_density
            )));
        }
        if self.dead_end_chances < 0 {
            return Err(LevelError::invalid(format!(
                "dead end chances must not be negative, got {}",
                self.dead_end_chances
            )));
        }
        check_probability("room link chance", self.room_link_chance)?;
        check_probability("dead end turn chance", self.dead_end_turn_chance)?;

        // Room sizes are drawn from [min_room_width, cell - 2)
        if self.min_room_width >= self.cell_width() - 2 {
            return Err(LevelError::invalid(format!(
                "room grid cells are {} tiles wide, too narrow for rooms at least {} wide",
                self.cell_width(),
                self.min_room_width
            )));
        }
        if self.min_room_width >= self.cell_height() - 2 {
            return Err(LevelError::invalid(format!(
                "room grid cells are {} tiles high, too low for rooms at least {} high",
                self.cell_height(),
                self.min_room_width
            )));
        }

        Ok(())
    }
}

fn check_probability(name: &str, value: f32) -> LevelResult<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(LevelError::invalid(format!(
            "{name} must be within [0, 1], got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(config: LevelConfig) {
        assert!(
            matches!(config.validate(), Err(LevelError::InvalidConfig(_))),
            "expected {config:?} to be rejected"
        );
    }

    #[test]
    fn test_default_is_valid() {
        let config = LevelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.cell_width(), 18);
        assert_eq!(config.cell_height(), 16);
        assert_eq!(config.cell_count(), 6);
    }

    #[test]
    fn test_rejects_single_cell_grid() {
        assert_invalid(LevelConfig {
            room_grid_x: 1,
            room_grid_y: 1,
            ..LevelConfig::default()
        });
    }

    #[test]
    fn test_rejects_out_of_range_fields() {
        assert_invalid(LevelConfig {
            floor_width: 0,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            room_grid_y: 0,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            min_room_height: 0,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            min_room_ratio: 0.0,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            room_density: -1,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            dead_end_chances: -3,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            room_link_chance: 1.5,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            dead_end_turn_chance: f32::NAN,
            ..LevelConfig::default()
        });
    }

    #[test]
    fn test_rejects_cells_too_small_for_rooms() {
        // 20 / 4 = 5 tile cells leave a [5, 3) width range
        assert_invalid(LevelConfig {
            floor_width: 20,
            room_grid_x: 4,
            ..LevelConfig::default()
        });
        // Height draws use the minimum width as lower bound
        assert_invalid(LevelConfig {
            floor_height: 14,
            room_grid_y: 2,
            ..LevelConfig::default()
        });
    }

    #[test]
    fn test_rejects_oversized_grid_and_floor() {
        assert_invalid(LevelConfig {
            room_grid_x: 70_000,
            room_grid_y: 70_000,
            ..LevelConfig::default()
        });
        assert_invalid(LevelConfig {
            floor_width: 70_000,
            floor_height: 70_000,
            ..LevelConfig::default()
        });
        let huge = LevelConfig {
            room_grid_x: i32::MAX,
            room_grid_y: 2,
            ..LevelConfig::default()
        };
        assert_eq!(huge.cell_count(), i32::MAX);
    }

    #[test]
    fn test_serde_fills_missing_fields() {
        let config: LevelConfig =
            serde_json::from_str(r#"{"floor_width": 80, "room_grid_x": 4}"#).unwrap();
        assert_eq!(config.floor_width, 80);
        assert_eq!(config.room_grid_x, 4);
        assert_eq!(config.floor_height, DEFAULT_FLOOR_HEIGHT);
        assert_eq!(config.dead_end_chances, DEFAULT_DEAD_END_CHANCES);
    }
}

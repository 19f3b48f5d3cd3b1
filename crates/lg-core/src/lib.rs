//! lg-core: Core floor generation for the level grid
//!
//! Generates a rectangular floor of typed tiles: rooms laid out on a coarse
//! room grid, room walls, corridors linking neighbouring rooms and winding
//! dead ends. Everything here is a pure function of a [`LevelConfig`] and a
//! [`RandomSource`]; drawing and input live in `lg-tui`.

pub mod dungeon;
pub mod grid;
pub mod movement;

mod consts;
mod error;
mod rng;

pub use consts::*;
pub use dungeon::{Level, LevelConfig, generate_level};
pub use error::{LevelError, LevelResult};
pub use rng::{LevelRng, RandomSource};

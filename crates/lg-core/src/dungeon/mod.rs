//! Floor generation
//!
//! Contains the generation config, rooms, and every generation step.

mod config;
mod corridor;
mod dead_end;
mod generation;
mod partition;
mod placer;
mod room;
mod walls;

pub use config::LevelConfig;
pub use corridor::{LinkAxis, RoomIndex, RoomLink, carve_link, generate_corridors};
pub use dead_end::{dead_end_count, generate_dead_ends};
pub use generation::{Level, generate_level};
pub use partition::{partition_rooms, target_room_count};
pub use placer::place_room;
pub use room::{Room, RoomGridCoordinate};
pub use walls::{create_hard_borders, setup_room_wall_tiles};

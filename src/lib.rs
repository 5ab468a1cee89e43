pub mod config;
pub mod constants;
pub mod error;
pub mod filters;
pub mod layer;
pub mod layers;
pub mod level;
pub mod location;
pub mod pipeline;
pub mod planner;
pub mod room;
pub mod terrain;
pub mod view;
pub mod walkability;

pub mod visual;
pub use visual::*;

pub use config::GenerationConfig;
pub use error::{ConfigError, GenerationError, GridError};
pub use layer::{GenerationLayer, GenerationStats, LevelState};
pub use level::GeneratedLevel;
pub use location::Coord;
pub use planner::{generate_level, LevelBuilder};
pub use room::{Room, RoomRect, Side};
pub use terrain::{Tile, TileFlags, TileGrid};
pub use view::View;
pub use walkability::WalkGraph;

pub mod fill;
pub mod floor_ceiling;
pub mod ladders;
pub mod optional_wall;
pub mod required_wall;
pub mod stairs;

pub use fill::FillLayer;
pub use floor_ceiling::FloorCeilingLayer;
pub use ladders::LadderLayer;
pub use optional_wall::{OptionalWallLayer, WallWidth};
pub use required_wall::RequiredWallLayer;
pub use stairs::StairLayer;

use crate::config::GenerationConfig;
use crate::layer::GenerationLayer;
use crate::room::Side;

/// Build the default layer stack (7 layers).
///
/// 1. FillLayer -- some small rooms become solid
/// 2. FloorCeilingLayer -- floor and ceiling bands in every open room
/// 3. OptionalWallLayer -- random side walls
/// 4. RequiredWallLayer (left) -- walls off openings too short to pass
/// 5. RequiredWallLayer (right)
/// 6. StairLayer -- diagonal stairs down from ledges
/// 7. LadderLayer -- ladders through thin floors
///
/// Room passes come first; the required walls inspect neighbours' finished
/// floors, and the global passes see every room fully decorated.
pub fn default_layers(config: &GenerationConfig) -> Vec<Box<dyn GenerationLayer>> {
    vec![
        Box::new(FillLayer::from_config(config)),
        Box::new(FloorCeilingLayer::from_config(config)),
        Box::new(OptionalWallLayer::from_config(config)),
        Box::new(RequiredWallLayer::from_config(Side::Left, config)),
        Box::new(RequiredWallLayer::from_config(Side::Right, config)),
        Box::new(StairLayer::from_config(config)),
        Box::new(LadderLayer::from_config(config)),
    ]
}

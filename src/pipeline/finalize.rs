//! Finalization phase: detaches the decorated level from the grid borrow and
//! builds the walk graph over the finished tiles.

use crate::config::GenerationConfig;
use crate::layer::{GenerationStats, LevelState};
use crate::level::GeneratedLevel;
use crate::room::{Room, RoomRect};
use crate::terrain::TileGrid;
use crate::walkability::WalkGraph;

#[derive(Clone, Debug)]
pub struct FinalizePhase {
    rooms: Vec<RoomRect>,
    stats: GenerationStats,
    seed: u64,
    fingerprint: u64,
    max_fall_height: i32,
}

impl FinalizePhase {
    pub fn from_level_state(state: LevelState<'_>, config: &GenerationConfig, fingerprint: u64) -> Self {
        FinalizePhase {
            rooms: state.rooms.iter().map(Room::rect).collect(),
            stats: state.stats,
            seed: config.seed,
            fingerprint,
            max_fall_height: config.max_fall_height,
        }
    }

    pub fn finish(self, grid: TileGrid) -> GeneratedLevel {
        let walk_graph = WalkGraph::build(&grid.view(), self.max_fall_height);
        GeneratedLevel::new(grid, self.rooms, walk_graph, self.stats, self.seed, self.fingerprint)
    }
}

//! The finished level handed to callers.

use crate::error::GridError;
use crate::layer::GenerationStats;
use crate::location::*;
use crate::room::RoomRect;
use crate::terrain::*;
use crate::visual::{AsciiVisualizer, LevelVisualizer};
use crate::walkability::WalkGraph;
use std::fmt;

/// Read-only result of a generation run.
#[derive(Clone, Debug)]
pub struct GeneratedLevel {
    grid: TileGrid,
    rooms: Vec<RoomRect>,
    walk_graph: WalkGraph,
    stats: GenerationStats,
    seed: u64,
    fingerprint: u64,
}

impl GeneratedLevel {
    pub(crate) fn new(
        grid: TileGrid,
        rooms: Vec<RoomRect>,
        walk_graph: WalkGraph,
        stats: GenerationStats,
        seed: u64,
        fingerprint: u64,
    ) -> Self {
        GeneratedLevel {
            grid,
            rooms,
            walk_graph,
            stats,
            seed,
            fingerprint,
        }
    }

    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Result<Tile, GridError> {
        self.grid.view().get(Coord::new(x, y))
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Room rectangles in the order the partitioner produced them.
    pub fn rooms(&self) -> &[RoomRect] {
        &self.rooms
    }

    pub fn walk_graph(&self) -> &WalkGraph {
        &self.walk_graph
    }

    pub fn stats(&self) -> &GenerationStats {
        &self.stats
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fingerprint of the layer stack that produced this level. Two levels
    /// with equal seeds, configs and fingerprints are identical.
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Feed tiles, then rooms, then walk graph edges to `visualizer`. Edges
    /// are emitted in row-major order of their source cell.
    pub fn visualize(&self, visualizer: &mut dyn LevelVisualizer) {
        for (pos, tile) in Coord::range(Coord::ZERO, self.grid.size()).zip(self.grid.tiles()) {
            visualizer.render_tile(pos, tile);
        }

        for room in &self.rooms {
            visualizer.render_room(room);
        }

        let mut sources: Vec<Coord> = self.walk_graph.iter().map(|(pos, _)| pos).collect();
        sources.sort_by_key(|pos| (pos.y, pos.x));
        for from in sources {
            for to in self.walk_graph.neighbors(from) {
                visualizer.render_edge(from, *to);
            }
        }
    }
}

impl fmt::Display for GeneratedLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ascii = AsciiVisualizer::new(self.width(), self.height());
        self.visualize(&mut ascii);
        write!(f, "{}", ascii)
    }
}

//! Core types for the decoration pipeline.
//!
//! `LevelState` is the evolving level passed through the layer stack: the
//! shared grid plus the rooms partitioned over it. `GenerationLayer` is the
//! trait each pass implements. A layer runs once over the whole level, so a
//! pass completes for every room before the next layer starts.

use crate::room::Room;
use crate::terrain::TileGrid;
use crate::error::GridError;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Counters layers bump as they modify the level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms: usize,
    pub filled_rooms: usize,
    pub optional_walls: usize,
    pub required_walls: usize,
    pub stairs: usize,
    pub ladder_candidates: usize,
    pub ladders: usize,
}

pub struct LevelState<'a> {
    pub grid: &'a TileGrid,
    pub rooms: Vec<Room<'a>>,
    pub stats: GenerationStats,
}

impl<'a> LevelState<'a> {
    pub fn new(grid: &'a TileGrid, rooms: Vec<Room<'a>>) -> Self {
        let stats = GenerationStats {
            rooms: rooms.len(),
            ..GenerationStats::default()
        };
        LevelState { grid, rooms, stats }
    }

    /// Rooms that later passes still decorate.
    pub fn open_rooms_mut(&mut self) -> impl Iterator<Item = &mut Room<'a>> {
        self.rooms.iter_mut().filter(|room| !room.filled)
    }
}

/// A single generation pass over the level.
///
/// Layers hold only their parameters; everything they change lives in the
/// `LevelState`. All randomness comes from the `rng` handed in, so a layer
/// stack is deterministic for a given seed.
pub trait GenerationLayer {
    /// Human-readable name for logging and fingerprinting.
    fn name(&self) -> &str;

    /// Quick check before running. Return false to skip this layer.
    fn is_applicable(&self, _state: &LevelState<'_>) -> bool {
        true
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError>;
}

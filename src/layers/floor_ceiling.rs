//! FloorCeilingLayer: lays a floor band and a ceiling band in every open room.
//!
//! Heights are drawn independently and redrawn until at least `min_gap` open
//! rows remain between them. The config check guarantees the minimum heights
//! plus the gap fit the smallest room the partitioner can produce, so the
//! redraw always ends.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use rand::{Rng, RngCore};

pub struct FloorCeilingLayer {
    pub min_floor: i32,
    pub max_floor: i32,
    pub min_ceiling: i32,
    pub max_ceiling: i32,
    /// Minimum open rows between floor and ceiling.
    pub min_gap: i32,
}

impl FloorCeilingLayer {
    pub fn from_config(config: &GenerationConfig) -> Self {
        FloorCeilingLayer {
            min_floor: config.min_floor_height,
            max_floor: config.max_floor_height,
            min_ceiling: config.min_ceiling_height,
            max_ceiling: config.max_ceiling_height,
            min_gap: config.min_walkable_gap,
        }
    }

    fn pick_heights(&self, room_height: i32, rng: &mut dyn RngCore) -> (i32, i32) {
        loop {
            let floor = rng.gen_range(self.min_floor..=self.max_floor);
            let ceiling = rng.gen_range(self.min_ceiling..=self.max_ceiling);
            if room_height - floor - ceiling >= self.min_gap {
                return (floor, ceiling);
            }
        }
    }
}

impl Default for FloorCeilingLayer {
    fn default() -> Self {
        FloorCeilingLayer::from_config(&GenerationConfig::default())
    }
}

impl GenerationLayer for FloorCeilingLayer {
    fn name(&self) -> &str {
        "floor_ceiling"
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        for room in state.open_rooms_mut() {
            let (floor, ceiling) = self.pick_heights(room.height(), rng);
            room.lay_floor_and_ceiling(floor, ceiling)?;
        }
        Ok(())
    }
}

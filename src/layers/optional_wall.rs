//! OptionalWallLayer: sometimes walls off one side of an open room.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use crate::room::{Room, Side};
use rand::{Rng, RngCore};

/// Wall thickness bounds shared by optional and required walls.
#[derive(Clone, Copy, Debug)]
pub struct WallWidth {
    pub min: i32,
    pub max: i32,
}

impl WallWidth {
    pub fn from_config(config: &GenerationConfig) -> Self {
        WallWidth {
            min: config.min_wall_width,
            max: config.max_wall_width,
        }
    }

    /// Draw a width, capped at a third of the room's width (at least 1).
    pub fn sample(&self, room: &Room<'_>, rng: &mut dyn RngCore) -> i32 {
        let cap = (room.width() / 3).max(1);
        rng.gen_range(self.min..=self.max).min(cap)
    }
}

pub struct OptionalWallLayer {
    pub probability: f64,
    pub width: WallWidth,
}

impl OptionalWallLayer {
    pub fn from_config(config: &GenerationConfig) -> Self {
        OptionalWallLayer {
            probability: config.wall_probability,
            width: WallWidth::from_config(config),
        }
    }
}

impl Default for OptionalWallLayer {
    fn default() -> Self {
        OptionalWallLayer::from_config(&GenerationConfig::default())
    }
}

impl GenerationLayer for OptionalWallLayer {
    fn name(&self) -> &str {
        "optional_wall"
    }

    fn is_applicable(&self, _state: &LevelState<'_>) -> bool {
        self.probability > 0.0
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        let mut carved = 0;
        for room in state.open_rooms_mut() {
            if !rng.gen_bool(self.probability) {
                continue;
            }
            let side = if rng.gen_bool(0.5) { Side::Left } else { Side::Right };
            let width = self.width.sample(room, rng);
            if room.wall_width(side) == 0 {
                room.carve_wall(side, width)?;
                carved += 1;
            }
        }
        state.stats.optional_walls += carved;
        Ok(())
    }
}

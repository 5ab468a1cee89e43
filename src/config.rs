//! Generation parameters.
//!
//! `GenerationConfig` is the single value handed to the pipeline. It is a
//! plain serde value so callers can keep it in whatever format they like;
//! missing fields fall back to the crate defaults in `constants`.

use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub width: i32,
    pub height: i32,
    pub seed: u64,

    pub min_room_width: i32,
    pub min_room_height: i32,
    pub max_room_width: i32,
    pub max_room_height: i32,
    pub split_x_probability: f64,

    pub small_room_width: i32,
    pub small_room_height: i32,
    pub fill_probability: f64,

    pub min_floor_height: i32,
    pub max_floor_height: i32,
    pub min_ceiling_height: i32,
    pub max_ceiling_height: i32,
    pub min_walkable_gap: i32,

    pub wall_probability: f64,
    pub min_wall_width: i32,
    pub max_wall_width: i32,
    pub min_doorway_height: i32,

    pub stair_probability: f64,
    pub max_stair_height: i32,

    pub min_ladder_gap: i32,
    pub max_ladder_height: i32,
    pub ladder_density: f64,
    pub ladder_exclusion_x: i32,
    pub ladder_exclusion_y: i32,

    pub max_fall_height: i32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        GenerationConfig {
            width: LEVEL_WIDTH,
            height: LEVEL_HEIGHT,
            seed: 0,
            min_room_width: MIN_ROOM_WIDTH,
            min_room_height: MIN_ROOM_HEIGHT,
            max_room_width: MAX_ROOM_WIDTH,
            max_room_height: MAX_ROOM_HEIGHT,
            split_x_probability: SPLIT_X_PROBABILITY,
            small_room_width: SMALL_ROOM_WIDTH,
            small_room_height: SMALL_ROOM_HEIGHT,
            fill_probability: FILL_PROBABILITY,
            min_floor_height: MIN_FLOOR_HEIGHT,
            max_floor_height: MAX_FLOOR_HEIGHT,
            min_ceiling_height: MIN_CEILING_HEIGHT,
            max_ceiling_height: MAX_CEILING_HEIGHT,
            min_walkable_gap: MIN_WALKABLE_GAP,
            wall_probability: WALL_PROBABILITY,
            min_wall_width: MIN_WALL_WIDTH,
            max_wall_width: MAX_WALL_WIDTH,
            min_doorway_height: MIN_DOORWAY_HEIGHT,
            stair_probability: STAIR_PROBABILITY,
            max_stair_height: MAX_STAIR_HEIGHT,
            min_ladder_gap: MIN_LADDER_GAP,
            max_ladder_height: MAX_LADDER_HEIGHT,
            ladder_density: LADDER_DENSITY,
            ladder_exclusion_x: LADDER_EXCLUSION_X,
            ladder_exclusion_y: LADDER_EXCLUSION_Y,
            max_fall_height: MAX_FALL_HEIGHT,
        }
    }
}

impl GenerationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Reject parameter sets the pipeline cannot terminate on or cannot
    /// express. Runs once before generation starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 1 || self.height < 1 {
            return Err(ConfigError::invalid(
                "width",
                format!("grid {}x{} has no cells", self.width, self.height),
            ));
        }

        positive("min_room_width", self.min_room_width)?;
        positive("min_room_height", self.min_room_height)?;
        ordered("max_room_width", self.min_room_width, self.max_room_width)?;
        ordered("max_room_height", self.min_room_height, self.max_room_height)?;

        if self.width < self.min_room_width || self.height < self.min_room_height {
            return Err(ConfigError::invalid(
                "width",
                format!(
                    "grid {}x{} is smaller than the minimum room {}x{}",
                    self.width, self.height, self.min_room_width, self.min_room_height
                ),
            ));
        }

        probability("split_x_probability", self.split_x_probability)?;
        probability("fill_probability", self.fill_probability)?;
        probability("wall_probability", self.wall_probability)?;
        probability("stair_probability", self.stair_probability)?;

        non_negative("min_floor_height", self.min_floor_height)?;
        non_negative("min_ceiling_height", self.min_ceiling_height)?;
        ordered("max_floor_height", self.min_floor_height, self.max_floor_height)?;
        ordered("max_ceiling_height", self.min_ceiling_height, self.max_ceiling_height)?;
        non_negative("min_walkable_gap", self.min_walkable_gap)?;

        let tightest = self.min_floor_height + self.min_ceiling_height + self.min_walkable_gap;
        if self.min_room_height < tightest {
            return Err(ConfigError::invalid(
                "min_room_height",
                format!(
                    "{} rows cannot hold floor {} + ceiling {} + gap {}",
                    self.min_room_height,
                    self.min_floor_height,
                    self.min_ceiling_height,
                    self.min_walkable_gap
                ),
            ));
        }

        positive("min_wall_width", self.min_wall_width)?;
        ordered("max_wall_width", self.min_wall_width, self.max_wall_width)?;
        non_negative("min_doorway_height", self.min_doorway_height)?;

        non_negative("max_stair_height", self.max_stair_height)?;

        positive("min_ladder_gap", self.min_ladder_gap)?;
        non_negative("max_ladder_height", self.max_ladder_height)?;
        if !(self.ladder_density >= 0.0 && self.ladder_density.is_finite()) {
            return Err(ConfigError::invalid(
                "ladder_density",
                format!("{} is not a finite non-negative density", self.ladder_density),
            ));
        }
        non_negative("ladder_exclusion_x", self.ladder_exclusion_x)?;
        non_negative("ladder_exclusion_y", self.ladder_exclusion_y)?;

        non_negative("max_fall_height", self.max_fall_height)?;

        Ok(())
    }
}

fn positive(field: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 1 {
        return Err(ConfigError::invalid(field, format!("{} must be at least 1", value)));
    }
    Ok(())
}

fn non_negative(field: &'static str, value: i32) -> Result<(), ConfigError> {
    if value < 0 {
        return Err(ConfigError::invalid(field, format!("{} must not be negative", value)));
    }
    Ok(())
}

fn ordered(field: &'static str, min: i32, max: i32) -> Result<(), ConfigError> {
    if max < min {
        return Err(ConfigError::invalid(
            field,
            format!("{} is below the minimum {}", max, min),
        ));
    }
    Ok(())
}

fn probability(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::invalid(
            field,
            format!("{} is not a probability", value),
        ));
    }
    Ok(())
}

//! The generation pipeline: partition, decorate, finalize.
//!
//! Phases run strictly in order. Decoration hands the whole level to each
//! layer in turn, so every layer sees the finished output of the one before.

pub mod finalize;
pub mod partition;

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::layer::*;
use crate::level::GeneratedLevel;
use crate::terrain::TileGrid;
use log::*;
use rand::RngCore;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use finalize::FinalizePhase;
use partition::Partitioner;

/// Run a full generation pass. The result depends only on `config`, the
/// layer stack, and the state of `rng`.
pub fn run_pipeline(
    config: &GenerationConfig,
    layers: &[Box<dyn GenerationLayer>],
    rng: &mut dyn RngCore,
) -> Result<GeneratedLevel, GenerationError> {
    config.validate()?;

    let grid = TileGrid::new(config.width, config.height)?;
    let fingerprint = compute_fingerprint(layers);

    let finalize = {
        let rooms = Partitioner::from_config(config).partition(grid.view(), rng)?;
        let mut state = LevelState::new(&grid, rooms);

        for layer in layers {
            run_layer(layer.as_ref(), &mut state, rng)?;
        }

        FinalizePhase::from_level_state(state, config, fingerprint)
    };

    Ok(finalize.finish(grid))
}

fn run_layer(
    layer: &dyn GenerationLayer,
    state: &mut LevelState<'_>,
    rng: &mut dyn RngCore,
) -> Result<(), GenerationError> {
    if !layer.is_applicable(state) {
        debug!("Layer {}: skipped", layer.name());
        return Ok(());
    }

    debug!("Layer {}: running over {} rooms", layer.name(), state.rooms.len());
    layer.apply(state, rng)?;
    Ok(())
}

/// Hash of layer names, identifying a layer stack. Together with the config
/// it pins down the generated level.
pub fn compute_fingerprint(layers: &[Box<dyn GenerationLayer>]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for layer in layers {
        layer.name().hash(&mut hasher);
    }
    hasher.finish()
}

//! Public API for level generation.
//!
//! `LevelBuilder` provides a fluent, append-only API for configuring a run.
//! Layers are added in order and `build` runs the whole pipeline from the
//! configured seed.

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::layer::GenerationLayer;
use crate::layers::default_layers;
use crate::level::GeneratedLevel;
use crate::pipeline::{compute_fingerprint, run_pipeline};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Append-only builder for a generation run.
pub struct LevelBuilder {
    config: GenerationConfig,
    layers: Vec<Box<dyn GenerationLayer>>,
}

impl LevelBuilder {
    /// Start with an empty layer stack. Rooms are still partitioned and the
    /// walk graph still built; nothing is decorated.
    pub fn new(config: GenerationConfig) -> Self {
        LevelBuilder {
            config,
            layers: Vec::new(),
        }
    }

    /// Append the default stack configured from this builder's config.
    pub fn with_default_layers(mut self) -> Self {
        self.layers.extend(default_layers(&self.config));
        self
    }

    /// Append a layer to the end of the stack.
    pub fn add_layer(mut self, layer: Box<dyn GenerationLayer>) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Compute a fingerprint (hash of layer names) for the configured stack.
    pub fn fingerprint(&self) -> u64 {
        compute_fingerprint(&self.layers)
    }

    /// Generate a level seeded from the config.
    pub fn build(&self) -> Result<GeneratedLevel, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.build_with_rng(&mut rng)
    }

    /// Generate a level drawing from a caller-supplied random stream.
    pub fn build_with_rng(&self, rng: &mut dyn RngCore) -> Result<GeneratedLevel, GenerationError> {
        run_pipeline(&self.config, &self.layers, rng)
    }
}

impl Default for LevelBuilder {
    /// Returns a builder with the default config and the default 7-layer stack.
    fn default() -> Self {
        LevelBuilder::new(GenerationConfig::default()).with_default_layers()
    }
}

/// Generate a level with the default layer stack.
pub fn generate_level(config: &GenerationConfig) -> Result<GeneratedLevel, GenerationError> {
    LevelBuilder::new(config.clone()).with_default_layers().build()
}

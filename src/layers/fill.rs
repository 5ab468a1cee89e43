//! FillLayer: fills some small rooms solid.
//!
//! A filled room is wall from edge to edge and is skipped by every later
//! decoration pass.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use log::*;
use rand::{Rng, RngCore};

pub struct FillLayer {
    /// Rooms narrower than this and shorter than `small_height` qualify.
    pub small_width: i32,
    pub small_height: i32,
    pub probability: f64,
}

impl FillLayer {
    pub fn from_config(config: &GenerationConfig) -> Self {
        FillLayer {
            small_width: config.small_room_width,
            small_height: config.small_room_height,
            probability: config.fill_probability,
        }
    }
}

impl Default for FillLayer {
    fn default() -> Self {
        FillLayer::from_config(&GenerationConfig::default())
    }
}

impl GenerationLayer for FillLayer {
    fn name(&self) -> &str {
        "fill"
    }

    fn is_applicable(&self, _state: &LevelState<'_>) -> bool {
        self.probability > 0.0
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        let mut filled = 0;
        for room in state.open_rooms_mut() {
            let small = room.width() < self.small_width && room.height() < self.small_height;
            if small && rng.gen_bool(self.probability) {
                trace!("Fill: filling room at {:?}", room.rect());
                room.fill_solid();
                filled += 1;
            }
        }
        state.stats.filled_rooms += filled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Coord;
    use crate::room::Room;
    use crate::terrain::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn fills_only_small_rooms() {
        let grid = TileGrid::new(20, 10).unwrap();
        let (small, large) = grid.view().split_x(6).unwrap();
        let small = small.subview(None, Some(Coord::new(6, 6))).unwrap();
        let mut state = LevelState::new(&grid, vec![Room::new(small), Room::new(large)]);

        let layer = FillLayer {
            small_width: 8,
            small_height: 8,
            probability: 1.0,
        };
        layer.apply(&mut state, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();

        assert!(state.rooms[0].filled);
        assert!(!state.rooms[1].filled);
        assert_eq!(state.stats.filled_rooms, 1);
        assert!(small.linearize().all(|t| t == Tile::Wall));
        assert!(large.linearize().all(Tile::is_empty));
    }

    #[test]
    fn zero_probability_is_not_applicable() {
        let grid = TileGrid::new(4, 4).unwrap();
        let state = LevelState::new(&grid, vec![Room::new(grid.view())]);
        let layer = FillLayer {
            probability: 0.0,
            ..FillLayer::default()
        };
        assert!(!layer.is_applicable(&state));
    }
}

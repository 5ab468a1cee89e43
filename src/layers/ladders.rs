//! LadderLayer: drops ladders through thin floors into the open space below.
//!
//! A candidate is anchored on an open cell whose 3-wide strip looks like
//!
//! ```text
//!   ...   anchor row, open
//!   ===   one or more structural rows
//!   ...   at least `min_gap` open rows
//!   ...
//!   ===   landing
//! ```
//!
//! and the ladder runs from the anchor down to the last open row above the
//! landing. Candidates are picked at random until the target count is met,
//! with each placed ladder clearing out its crowded neighbours.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use crate::location::*;
use crate::terrain::*;
use crate::view::View;
use log::*;
use rand::{Rng, RngCore};

pub struct LadderLayer {
    pub min_gap: i32,
    pub max_height: i32,
    /// Ladders placed per valid candidate found.
    pub density: f64,
    pub exclusion_x: i32,
    pub exclusion_y: i32,
}

impl LadderLayer {
    pub fn from_config(config: &GenerationConfig) -> Self {
        LadderLayer {
            min_gap: config.min_ladder_gap,
            max_height: config.max_ladder_height,
            density: config.ladder_density,
            exclusion_x: config.ladder_exclusion_x,
            exclusion_y: config.ladder_exclusion_y,
        }
    }

    /// Whether `other` sits too close to an already carved `ladder`.
    fn crowds(&self, ladder: &LadderRun, other: &LadderRun) -> bool {
        (other.top.x - ladder.top.x).abs() <= self.exclusion_x
            && other.top.y - self.exclusion_y <= ladder.bottom.y
            && other.bottom.y + self.exclusion_y >= ladder.top.y
    }
}

impl Default for LadderLayer {
    fn default() -> Self {
        LadderLayer::from_config(&GenerationConfig::default())
    }
}

/// A vertical ladder from `top` down to `bottom`, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LadderRun {
    pub top: Coord,
    pub bottom: Coord,
}

impl LadderRun {
    pub fn span(&self) -> i32 {
        self.bottom.y - self.top.y + 1
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let x = self.top.x;
        (self.top.y..=self.bottom.y).map(move |y| Coord::new(x, y))
    }

    pub fn carve(&self, view: &View<'_>) -> Result<(), GridError> {
        for pos in self.cells() {
            view.set(pos, Tile::Ladder)?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Row {
    Open,
    Structural,
    Mixed,
}

/// Classify the 3-wide strip centred on `center`. None once the strip
/// leaves the grid.
fn classify(view: &View<'_>, center: Coord) -> Option<Row> {
    let mut open = 0;
    let mut structural = 0;
    for dx in -1..=1 {
        let tile = view.try_get(center + Coord::X * dx)?;
        if tile.is_empty() {
            open += 1;
        } else if tile.is_structural() {
            structural += 1;
        }
    }
    Some(match (open, structural) {
        (3, _) => Row::Open,
        (_, 3) => Row::Structural,
        _ => Row::Mixed,
    })
}

/// Count consecutive rows of `kind` starting at `pos`, moving down. Leaves
/// `pos` on the first row that differs.
fn run_of(view: &View<'_>, pos: &mut Coord, kind: Row) -> Option<i32> {
    let mut count = 0;
    while classify(view, *pos)? == kind {
        count += 1;
        *pos += Coord::Y;
    }
    Some(count)
}

/// Validate a ladder anchored at `anchor` against the current grid.
pub fn find_ladder(view: &View<'_>, anchor: Coord, min_gap: i32, max_height: i32) -> Option<LadderRun> {
    if classify(view, anchor)? != Row::Open {
        return None;
    }

    let mut pos = anchor + Coord::Y;
    if run_of(view, &mut pos, Row::Structural)? == 0 {
        return None;
    }
    if run_of(view, &mut pos, Row::Open)? < min_gap {
        return None;
    }
    if classify(view, pos)? != Row::Structural {
        return None;
    }

    let ladder = LadderRun {
        top: anchor,
        bottom: pos - Coord::Y,
    };
    if ladder.span() > max_height {
        trace!("Ladders: {} rows from {} is too tall", ladder.span(), anchor);
        return None;
    }

    Some(ladder)
}

impl GenerationLayer for LadderLayer {
    fn name(&self) -> &str {
        "ladders"
    }

    fn is_applicable(&self, _state: &LevelState<'_>) -> bool {
        self.density > 0.0
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        let view = state.grid.view();
        let (min_gap, max_height) = (self.min_gap, self.max_height);

        let mut candidates: Vec<LadderRun> = view
            .find(move |v, pos| find_ladder(v, pos, min_gap, max_height))
            .map(|(_, ladder)| ladder)
            .collect();

        let found = candidates.len();
        let target = (found as f64 * self.density).ceil() as usize;
        debug!("Ladders: {} candidates, placing up to {}", found, target);

        let mut placed = 0;
        while placed < target && !candidates.is_empty() {
            let ladder = candidates.swap_remove(rng.gen_range(0..candidates.len()));

            if find_ladder(&view, ladder.top, min_gap, max_height) != Some(ladder) {
                trace!("Ladders: candidate at {} no longer fits", ladder.top);
                continue;
            }

            ladder.carve(&view)?;
            placed += 1;
            candidates.retain(|other| !self.crowds(&ladder, other));
        }

        state.stats.ladder_candidates += found;
        state.stats.ladders += placed;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SHAFT: [&str; 6] = [
        ".....",
        "=====",
        ".....",
        ".....",
        ".....",
        "=====",
    ];

    fn layer(density: f64) -> LadderLayer {
        LadderLayer {
            min_gap: 2,
            max_height: 12,
            density,
            exclusion_x: 4,
            exclusion_y: 0,
        }
    }

    #[test]
    fn shaft_between_floors_is_a_candidate() {
        let grid = TileGrid::from_ascii(&SHAFT).unwrap();
        let view = grid.view();

        let ladder = find_ladder(&view, Coord::new(2, 0), 2, 12).unwrap();
        assert_eq!(ladder.bottom, Coord::new(2, 4));
        assert_eq!(ladder.span(), 5);

        assert_eq!(find_ladder(&view, Coord::new(2, 0), 4, 12), None);
        assert_eq!(find_ladder(&view, Coord::new(2, 0), 2, 4), None);
        assert_eq!(find_ladder(&view, Coord::new(0, 0), 2, 12), None);
        assert_eq!(find_ladder(&view, Coord::new(2, 2), 2, 12), None);
    }

    #[test]
    fn stair_in_strip_rejects() {
        let grid = TileGrid::from_ascii(&SHAFT).unwrap();
        grid.view().set(Coord::new(3, 3), Tile::Stair).unwrap();
        assert_eq!(find_ladder(&grid.view(), Coord::new(2, 0), 2, 12), None);
        assert!(find_ladder(&grid.view(), Coord::new(1, 0), 2, 12).is_some());
    }

    #[test]
    fn places_one_ladder_in_a_narrow_shaft() {
        let grid = TileGrid::from_ascii(&SHAFT).unwrap();
        let mut state = LevelState::new(&grid, Vec::new());
        layer(1.0)
            .apply(&mut state, &mut ChaCha8Rng::seed_from_u64(2))
            .unwrap();

        // Three anchors fit, but the first carve crowds out the rest.
        assert_eq!(state.stats.ladder_candidates, 3);
        assert_eq!(state.stats.ladders, 1);
        assert_eq!(grid.tiles().filter(|t| *t == Tile::Ladder).count(), 5);
    }

    #[test]
    fn zero_density_is_skipped() {
        let grid = TileGrid::from_ascii(&SHAFT).unwrap();
        let state = LevelState::new(&grid, Vec::new());
        assert!(!layer(0.0).is_applicable(&state));
    }

    #[test]
    fn placed_ladders_respect_exclusion() {
        let wide: Vec<String> = SHAFT.iter().map(|r| r.repeat(8)).collect();
        let rows: Vec<&str> = wide.iter().map(String::as_str).collect();
        let grid = TileGrid::from_ascii(&rows).unwrap();
        let mut state = LevelState::new(&grid, Vec::new());
        layer(1.0)
            .apply(&mut state, &mut ChaCha8Rng::seed_from_u64(9))
            .unwrap();

        let columns: Vec<i32> = (0..grid.width())
            .filter(|x| grid.get(Coord::new(*x, 0)) == Some(Tile::Ladder))
            .collect();
        assert_eq!(columns.len(), state.stats.ladders);
        assert!(columns.len() > 1);
        for pair in columns.windows(2) {
            assert!(pair[1] - pair[0] > 4);
        }
    }
}

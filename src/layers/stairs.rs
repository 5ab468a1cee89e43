//! StairLayer: connects a ledge to the floor below it with a diagonal stair.
//!
//! Scans the finished grid for a wall or floor edge with open space beside it
//! and a flat floor some rows further down. A staircase descends one row per
//! column away from the edge until it meets that floor; everything between
//! each step and the floor is backfilled.
//!
//! ```text
//!   ..      ..
//!   =.....  =/....
//!   =.....  ==/...
//!   =.....  ===/..
//!   ======  ======
//! ```

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use crate::location::*;
use crate::terrain::*;
use crate::view::View;
use log::*;
use rand::{Rng, RngCore};

pub struct StairLayer {
    pub probability: f64,
    /// Tallest drop a staircase may bridge.
    pub max_height: i32,
}

impl StairLayer {
    pub fn from_config(config: &GenerationConfig) -> Self {
        StairLayer {
            probability: config.stair_probability,
            max_height: config.max_stair_height,
        }
    }
}

impl Default for StairLayer {
    fn default() -> Self {
        StairLayer::from_config(&GenerationConfig::default())
    }
}

/// A validated staircase. Steps run from `start` down and away from the
/// ledge, one column per row, `height` steps in all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Staircase {
    pub start: Coord,
    /// +1 descends rightward, -1 leftward.
    pub direction: i32,
    pub height: i32,
}

impl Staircase {
    pub fn steps(&self) -> impl Iterator<Item = Coord> {
        let stride = Coord::X * self.direction + Coord::Y;
        let start = self.start;
        (0..self.height).map(move |k| start + stride * k)
    }

    /// Row of the floor the staircase lands on.
    pub fn floor_row(&self) -> i32 {
        self.start.y + self.height
    }

    pub fn carve(&self, view: &View<'_>) -> Result<(), GridError> {
        for step in self.steps() {
            view.set(step, Tile::Stair)?;
            for y in step.y + 1..self.floor_row() {
                view.set(Coord::new(step.x, y), Tile::Floor)?;
            }
        }
        Ok(())
    }
}

fn is_open(view: &View<'_>, pos: Coord) -> bool {
    view.try_get(pos) == Some(Tile::Empty)
}

fn is_structural(view: &View<'_>, pos: Coord) -> bool {
    view.try_get(pos).is_some_and(Tile::is_structural)
}

fn has_headroom(view: &View<'_>, pos: Coord) -> bool {
    is_open(view, pos - Coord::Y) && is_open(view, pos - Coord::Y * 2)
}

/// Rows from `pos` down to the first non-empty cell, provided that cell is
/// structural.
fn depth_to_floor(view: &View<'_>, pos: Coord) -> Option<i32> {
    let hit = view
        .cast_until(pos, Coord::Y, |v, c| v.try_get(c) != Some(Tile::Empty))
        .ok()?;
    is_structural(view, hit).then_some(hit.y - pos.y)
}

/// Validate a staircase starting at `start` and descending away from the
/// ledge on the `-direction` side. Nothing is modified.
pub fn find_staircase(
    view: &View<'_>,
    start: Coord,
    direction: i32,
    max_height: i32,
) -> Option<Staircase> {
    let dx = Coord::X * direction;
    let side = start - dx;

    if !is_open(view, start) || !has_headroom(view, start) {
        return None;
    }
    if !is_structural(view, side) || !has_headroom(view, side) {
        return None;
    }
    if !is_open(view, start + dx) {
        return None;
    }

    let height = depth_to_floor(view, start)?;
    if height > max_height {
        trace!("Stairs: drop of {} at {} is too tall", height, start);
        return None;
    }

    let stairs = Staircase {
        start,
        direction,
        height,
    };

    for (k, step) in stairs.steps().enumerate() {
        if !is_open(view, step) || !has_headroom(view, step) {
            return None;
        }
        if depth_to_floor(view, step)? != height - k as i32 {
            return None;
        }
    }

    let ledge_is_solid = (0..=height).all(|k| is_structural(view, side + Coord::Y * k));
    if !ledge_is_solid {
        return None;
    }

    Some(stairs)
}

impl GenerationLayer for StairLayer {
    fn name(&self) -> &str {
        "stairs"
    }

    fn is_applicable(&self, _state: &LevelState<'_>) -> bool {
        self.probability > 0.0 && self.max_height >= 1
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        let view = state.grid.view();
        let max_height = self.max_height;

        // `find` is lazy, so each candidate is matched against the grid as
        // it stands after every earlier carve.
        let candidates = view.find(move |v, pos| {
            [1, -1]
                .into_iter()
                .find_map(|direction| find_staircase(v, pos, direction, max_height))
        });

        let mut carved = 0;
        for (_, stairs) in candidates {
            if !rng.gen_bool(self.probability) {
                continue;
            }
            trace!("Stairs: {} steps from {} toward {}", stairs.height, stairs.start, stairs.direction);
            stairs.carve(&view)?;
            carved += 1;
        }

        debug!("Stairs: carved {}", carved);
        state.stats.stairs += carved;
        Ok(())
    }
}

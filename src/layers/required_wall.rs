//! RequiredWallLayer: closes room sides that cannot serve as a doorway.
//!
//! Runs once per side across all rooms, after every room has its floor,
//! ceiling and optional walls, because the check reads the neighbouring
//! room's finished geometry. A side is walled when it touches the level
//! boundary, or when the opening into the neighbour is too short to pass.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::layer::*;
use crate::location::*;
use crate::room::{Room, Side};
use crate::terrain::*;
use crate::layers::optional_wall::WallWidth;
use log::*;
use rand::RngCore;

pub struct RequiredWallLayer {
    pub side: Side,
    /// Shortest opening that still counts as a doorway.
    pub min_doorway_height: i32,
    pub width: WallWidth,
}

impl RequiredWallLayer {
    pub fn from_config(side: Side, config: &GenerationConfig) -> Self {
        RequiredWallLayer {
            side,
            min_doorway_height: config.min_doorway_height,
            width: WallWidth::from_config(config),
        }
    }

    fn needs_wall(&self, grid: &TileGrid, room: &Room<'_>) -> bool {
        match doorway_height(grid, room, self.side) {
            None => true,
            Some(run) => run > 0 && run < self.min_doorway_height && run < room.height(),
        }
    }
}

/// Longest run of rows where the room's edge column and the column just
/// beyond it are both open. `None` if the side lies on the level boundary.
pub fn doorway_height(grid: &TileGrid, room: &Room<'_>, side: Side) -> Option<i32> {
    let rect = room.rect();
    let (inside, outside) = match side {
        Side::Left => (rect.left, rect.left - 1),
        Side::Right => (rect.right() - 1, rect.right()),
    };
    if outside < 0 || outside >= grid.width() {
        return None;
    }

    let open = |x: i32, y: i32| grid.get(Coord::new(x, y)).is_some_and(|t| !t.is_solid());

    let mut longest = 0;
    let mut run = 0;
    for y in rect.top..rect.bottom() {
        if open(inside, y) && open(outside, y) {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    Some(longest)
}

impl GenerationLayer for RequiredWallLayer {
    fn name(&self) -> &str {
        match self.side {
            Side::Left => "required_wall_left",
            Side::Right => "required_wall_right",
        }
    }

    fn apply(&self, state: &mut LevelState<'_>, rng: &mut dyn RngCore) -> Result<(), GridError> {
        let grid = state.grid;
        let mut carved = 0;
        for room in state.open_rooms_mut() {
            if room.wall_width(self.side) > 0 || !self.needs_wall(grid, room) {
                continue;
            }
            trace!("RequiredWall: closing {:?} side of {:?}", self.side, room.rect());
            let width = self.width.sample(room, rng);
            room.carve_wall(self.side, width)?;
            carved += 1;
        }
        state.stats.required_walls += carved;
        Ok(())
    }
}

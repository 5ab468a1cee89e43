//! Partition phase: binary space partitioning of the whole level into rooms.
//!
//! Works from an explicit worklist rather than recursion, so stack depth does
//! not grow with the grid. A view is final once it fits the maximum room size,
//! or once neither axis can be cut without producing a half below the minimum.

use crate::config::GenerationConfig;
use crate::error::GridError;
use crate::room::Room;
use crate::view::View;
use log::*;
use rand::{Rng, RngCore};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Axis {
    X,
    Y,
}

#[derive(Clone, Debug)]
pub struct Partitioner {
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    /// Chance of attempting a cut on x before y.
    pub split_x_probability: f64,
}

impl Partitioner {
    pub fn from_config(config: &GenerationConfig) -> Self {
        Partitioner {
            min_width: config.min_room_width,
            min_height: config.min_room_height,
            max_width: config.max_room_width,
            max_height: config.max_room_height,
            split_x_probability: config.split_x_probability,
        }
    }

    fn fits(&self, view: &View<'_>) -> bool {
        view.width() <= self.max_width && view.height() <= self.max_height
    }

    fn can_split(&self, view: &View<'_>, axis: Axis) -> bool {
        match axis {
            Axis::X => view.width() >= self.min_width * 2,
            Axis::Y => view.height() >= self.min_height * 2,
        }
    }

    fn split<'a>(
        &self,
        view: &View<'a>,
        axis: Axis,
        rng: &mut dyn RngCore,
    ) -> Result<(View<'a>, View<'a>), GridError> {
        match axis {
            Axis::X => {
                let x = rng.gen_range(self.min_width..=view.width() - self.min_width);
                view.split_x(x)
            }
            Axis::Y => {
                let y = rng.gen_range(self.min_height..=view.height() - self.min_height);
                view.split_y(y)
            }
        }
    }

    /// Cut `view` into rooms that tile it exactly.
    pub fn partition<'a>(
        &self,
        view: View<'a>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Room<'a>>, GridError> {
        let mut rooms = Vec::new();
        let mut pending = vec![view];

        while let Some(current) = pending.pop() {
            if self.fits(&current) {
                rooms.push(Room::new(current));
                continue;
            }

            let preferred = if rng.gen_bool(self.split_x_probability) {
                Axis::X
            } else {
                Axis::Y
            };
            let fallback = match preferred {
                Axis::X => Axis::Y,
                Axis::Y => Axis::X,
            };

            let axis = [preferred, fallback]
                .into_iter()
                .find(|axis| self.can_split(&current, *axis));

            match axis {
                Some(axis) => {
                    let (first, second) = self.split(&current, axis, rng)?;
                    pending.push(first);
                    pending.push(second);
                }
                None => {
                    trace!(
                        "Partition: keeping irreducible {}x{} view at {}",
                        current.width(),
                        current.height(),
                        current.top_left()
                    );
                    rooms.push(Room::new(current));
                }
            }
        }

        debug!("Partition: {} rooms", rooms.len());

        Ok(rooms)
    }
}

use crate::error::GridError;
use crate::location::*;
use crate::terrain::*;
use crate::view::View;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];
}

/// Grid-space rectangle of a room, detached from the grid borrow.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct RoomRect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl RoomRect {
    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.x >= self.left && pos.x < self.right() && pos.y >= self.top && pos.y < self.bottom()
    }

    pub fn area(&self) -> i32 {
        self.width * self.height
    }
}

/// A partitioned region of the level plus its decoration state.
///
/// Created by the partitioner and only ever mutated by the decoration
/// layers. Rooms never change size.
#[derive(Clone, Debug)]
pub struct Room<'a> {
    view: View<'a>,
    pub floor_height: i32,
    pub ceiling_height: i32,
    pub left_wall_width: i32,
    pub right_wall_width: i32,
    pub filled: bool,
}

impl<'a> Room<'a> {
    pub fn new(view: View<'a>) -> Room<'a> {
        Room {
            view,
            floor_height: 0,
            ceiling_height: 0,
            left_wall_width: 0,
            right_wall_width: 0,
            filled: false,
        }
    }

    pub fn view(&self) -> View<'a> {
        self.view
    }

    pub fn width(&self) -> i32 {
        self.view.width()
    }

    pub fn height(&self) -> i32 {
        self.view.height()
    }

    pub fn rect(&self) -> RoomRect {
        let tl = self.view.top_left();
        RoomRect {
            left: tl.x,
            top: tl.y,
            width: self.width(),
            height: self.height(),
        }
    }

    pub fn wall_width(&self, side: Side) -> i32 {
        match side {
            Side::Left => self.left_wall_width,
            Side::Right => self.right_wall_width,
        }
    }

    /// Fill the whole room with wall and mark it filled.
    pub fn fill_solid(&mut self) {
        self.view.fill(Tile::Wall);
        self.filled = true;
    }

    /// Lay `floor` rows of floor along the bottom and `ceiling` rows of
    /// ceiling along the top.
    pub fn lay_floor_and_ceiling(&mut self, floor: i32, ceiling: i32) -> Result<(), GridError> {
        let (w, h) = (self.width(), self.height());
        if floor > 0 {
            self.view
                .subview(Some(Coord::new(0, h - floor)), None)?
                .fill(Tile::Floor);
        }
        if ceiling > 0 {
            self.view
                .subview(None, Some(Coord::new(w, ceiling)))?
                .fill(Tile::Ceiling);
        }
        self.floor_height = floor;
        self.ceiling_height = ceiling;
        Ok(())
    }

    /// Carve a full-height wall `width` columns thick along `side`.
    pub fn carve_wall(&mut self, side: Side, width: i32) -> Result<(), GridError> {
        let (w, h) = (self.width(), self.height());
        let strip = match side {
            Side::Left => self.view.subview(None, Some(Coord::new(width, h)))?,
            Side::Right => self.view.subview(Some(Coord::new(w - width, 0)), None)?,
        };
        strip.fill(Tile::Wall);
        match side {
            Side::Left => self.left_wall_width = width,
            Side::Right => self.right_wall_width = width,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decoration_writes_through_to_grid() {
        let grid = TileGrid::new(8, 8).unwrap();
        let view = grid.view().subview(Some(Coord::new(2, 1)), Some(Coord::new(7, 7))).unwrap();
        let mut room = Room::new(view);

        room.lay_floor_and_ceiling(2, 1).unwrap();
        room.carve_wall(Side::Right, 1).unwrap();

        assert_eq!(room.rect(), RoomRect { left: 2, top: 1, width: 5, height: 6 });
        assert_eq!(
            grid.view().to_string(),
            [
                "........",
                "..^^^^#.",
                "......#.",
                "......#.",
                "......#.",
                "..====#.",
                "..====#.",
                "........",
            ]
            .iter()
            .map(|r| format!("{}\n", r))
            .collect::<String>()
        );
        assert_eq!(room.wall_width(Side::Right), 1);
        assert_eq!(room.wall_width(Side::Left), 0);
    }

    #[test]
    fn oversized_wall_is_out_of_range() {
        let grid = TileGrid::new(4, 4).unwrap();
        let mut room = Room::new(grid.view());
        assert!(room.carve_wall(Side::Left, 5).is_err());
        assert_eq!(room.left_wall_width, 0);
    }

    #[test]
    fn fill_solid_marks_room() {
        let grid = TileGrid::new(3, 3).unwrap();
        let mut room = Room::new(grid.view());
        room.fill_solid();
        assert!(room.filled);
        assert!(grid.tiles().all(|t| t == Tile::Wall));
    }

    #[test]
    fn rect_edges() {
        let rect = RoomRect { left: 3, top: 2, width: 4, height: 5 };
        assert_eq!(rect.right(), 7);
        assert_eq!(rect.bottom(), 7);
        assert!(rect.contains(Coord::new(6, 6)));
        assert!(!rect.contains(Coord::new(7, 2)));
        assert_eq!(rect.area(), 20);
    }
}

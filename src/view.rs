//! Bounds-checked rectangular windows onto a shared `TileGrid`.
//!
//! A `View` carries only its rectangle and a shared borrow of the grid, so it
//! is `Copy` and any number of views may cover the same cells at once. Every
//! coordinate passed to a view is local to it (`0..width`, `0..height`) and is
//! translated to grid space after the range check.

use crate::error::GridError;
use crate::location::*;
use crate::terrain::*;
use std::fmt;

#[derive(Copy, Clone)]
pub struct View<'a> {
    grid: &'a TileGrid,
    tl: Coord,
    br: Coord,
}

impl<'a> View<'a> {
    pub(crate) fn whole(grid: &'a TileGrid) -> View<'a> {
        View {
            grid,
            tl: Coord::ZERO,
            br: grid.size(),
        }
    }

    /// Build a view from grid-space corners (`tl` inclusive, `br` exclusive).
    pub fn new(grid: &'a TileGrid, tl: Coord, br: Coord) -> Result<View<'a>, GridError> {
        if tl.x < 0
            || tl.y < 0
            || tl.x >= br.x
            || tl.y >= br.y
            || br.x > grid.width()
            || br.y > grid.height()
        {
            return Err(GridError::out_of_range(tl, br, grid.width(), grid.height()));
        }
        Ok(View { grid, tl, br })
    }

    pub fn grid(&self) -> &'a TileGrid {
        self.grid
    }

    /// Top-left corner in grid space.
    pub fn top_left(&self) -> Coord {
        self.tl
    }

    /// Exclusive bottom-right corner in grid space.
    pub fn bottom_right(&self) -> Coord {
        self.br
    }

    #[inline]
    pub fn width(&self) -> i32 {
        Coord::width(self.tl, self.br)
    }

    #[inline]
    pub fn height(&self) -> i32 {
        Coord::height(self.tl, self.br)
    }

    pub fn size(&self) -> Coord {
        Coord::new(self.width(), self.height())
    }

    #[inline]
    pub fn contains(&self, local: Coord) -> bool {
        local.x >= 0 && local.y >= 0 && local.x < self.width() && local.y < self.height()
    }

    pub fn to_grid(&self, local: Coord) -> Coord {
        local + self.tl
    }

    pub fn from_grid(&self, global: Coord) -> Coord {
        global - self.tl
    }

    /// Translate a local coordinate of this view into `other`'s local space.
    pub fn to_other(&self, local: Coord, other: &View<'_>) -> Coord {
        other.from_grid(self.to_grid(local))
    }

    fn check(&self, local: Coord) -> Result<Coord, GridError> {
        if self.contains(local) {
            Ok(self.to_grid(local))
        } else {
            Err(GridError::out_of_range(
                local,
                local + Coord::new(1, 1),
                self.width(),
                self.height(),
            ))
        }
    }

    pub fn get(&self, local: Coord) -> Result<Tile, GridError> {
        let pos = self.check(local)?;
        Ok(self.grid.load(pos))
    }

    /// Like `get`, but out-of-range reads yield `None`.
    pub fn try_get(&self, local: Coord) -> Option<Tile> {
        self.get(local).ok()
    }

    pub fn set(&self, local: Coord, tile: Tile) -> Result<(), GridError> {
        let pos = self.check(local)?;
        self.grid.store(pos, tile);
        Ok(())
    }

    pub fn fill(&self, tile: Tile) {
        for pos in Coord::range(self.tl, self.br) {
            self.grid.store(pos, tile);
        }
    }

    /// A view nested inside this one. `None` corners default to the whole view.
    pub fn subview(&self, tl: Option<Coord>, br: Option<Coord>) -> Result<View<'a>, GridError> {
        let tl = tl.unwrap_or(Coord::ZERO);
        let br = br.unwrap_or_else(|| self.size());
        if tl.x < 0
            || tl.y < 0
            || tl.x >= br.x
            || tl.y >= br.y
            || br.x > self.width()
            || br.y > self.height()
        {
            return Err(GridError::out_of_range(tl, br, self.width(), self.height()));
        }
        Ok(View {
            grid: self.grid,
            tl: self.to_grid(tl),
            br: self.to_grid(br),
        })
    }

    /// Split into the columns left of `x` and the columns from `x` on.
    pub fn split_x(&self, x: i32) -> Result<(View<'a>, View<'a>), GridError> {
        if x <= 0 || x >= self.width() {
            return Err(GridError::out_of_range(
                Coord::new(x, 0),
                Coord::new(x, self.height()),
                self.width(),
                self.height(),
            ));
        }
        Ok((
            self.subview(None, Some(Coord::new(x, self.height())))?,
            self.subview(Some(Coord::new(x, 0)), None)?,
        ))
    }

    /// Split into the rows above `y` and the rows from `y` on.
    pub fn split_y(&self, y: i32) -> Result<(View<'a>, View<'a>), GridError> {
        if y <= 0 || y >= self.height() {
            return Err(GridError::out_of_range(
                Coord::new(0, y),
                Coord::new(self.width(), y),
                self.width(),
                self.height(),
            ));
        }
        Ok((
            self.subview(None, Some(Coord::new(self.width(), y)))?,
            self.subview(Some(Coord::new(0, y)), None)?,
        ))
    }

    /// Lazily yield `(coord, data)` for every cell, row-major, where
    /// `predicate(view, coord)` returns `Some(data)`.
    pub fn find<T, F>(self, mut predicate: F) -> impl Iterator<Item = (Coord, T)> + 'a
    where
        F: FnMut(&View<'a>, Coord) -> Option<T> + 'a,
        T: 'a,
    {
        Coord::range(Coord::ZERO, self.size())
            .filter_map(move |pos| predicate(&self, pos).map(|data| (pos, data)))
    }

    /// Coordinates of every cell matching a boolean predicate, row-major.
    pub fn find_matching<F>(self, predicate: F) -> impl Iterator<Item = Coord> + 'a
    where
        F: Fn(&View<'a>, Coord) -> bool + 'a,
    {
        self.find(move |view, pos| predicate(view, pos).then_some(()))
            .map(|(pos, _)| pos)
    }

    /// Step from `start` by `direction` until `predicate` holds.
    pub fn cast_until<F>(&self, start: Coord, direction: Coord, predicate: F) -> Result<Coord, GridError>
    where
        F: Fn(&View<'a>, Coord) -> bool,
    {
        let not_found = GridError::NotFound { start, direction };
        let mut pos = start;
        while self.contains(pos) {
            if predicate(self, pos) {
                return Ok(pos);
            }
            if direction == Coord::ZERO {
                break;
            }
            pos += direction;
        }
        Err(not_found)
    }

    /// All tiles in row-major order.
    pub fn linearize(&self) -> impl Iterator<Item = Tile> + 'a {
        let grid = self.grid;
        Coord::range(self.tl, self.br).map(move |pos| grid.load(pos))
    }

    pub fn contains_tile(&self, tile: Tile) -> bool {
        self.linearize().any(|t| t == tile)
    }

    /// Copy `source` cell by cell into this view. Both must be the same size.
    pub fn blit(&self, source: &View<'_>) -> Result<(), GridError> {
        if source.size() != self.size() {
            return Err(GridError::out_of_range(
                Coord::ZERO,
                source.size(),
                self.width(),
                self.height(),
            ));
        }
        let tiles: Vec<Tile> = source.linearize().collect();
        for (pos, tile) in Coord::range(self.tl, self.br).zip(tiles) {
            self.grid.store(pos, tile);
        }
        Ok(())
    }

    /// Detached snapshot of this view's cells.
    pub fn copy(&self) -> Result<TileGrid, GridError> {
        let copy = TileGrid::new(self.width(), self.height())?;
        for (local, tile) in Coord::range(Coord::ZERO, self.size()).zip(self.linearize()) {
            copy.store(local, tile);
        }
        Ok(copy)
    }
}

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in self.tl.y..self.br.y {
            let row: String = (self.tl.x..self.br.x)
                .map(|x| self.grid.load(Coord::new(x, y)).glyph())
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("tl", &self.tl)
            .field("br", &self.br)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: i32, h: i32) -> TileGrid {
        TileGrid::new(w, h).unwrap()
    }

    #[test]
    fn set_then_get_round_trips() {
        let grid = grid(5, 4);
        let view = grid.view();
        for tile in Tile::ALL {
            view.set(Coord::new(4, 3), tile).unwrap();
            assert_eq!(view.get(Coord::new(4, 3)).unwrap(), tile);
        }
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let grid = grid(5, 4);
        let view = grid.view().subview(Some(Coord::new(1, 1)), Some(Coord::new(3, 3))).unwrap();
        assert!(matches!(view.get(Coord::new(2, 0)), Err(GridError::OutOfRange { .. })));
        assert!(view.set(Coord::new(-1, 0), Tile::Wall).is_err());
        assert_eq!(view.try_get(Coord::new(0, 2)), None);
        assert!(grid.tiles().all(Tile::is_empty));
    }

    #[test]
    fn subview_writes_alias_parent() {
        let grid = grid(6, 6);
        let parent = grid.view().subview(Some(Coord::new(1, 1)), None).unwrap();
        let child = parent.subview(Some(Coord::new(2, 3)), Some(Coord::new(4, 5))).unwrap();

        child.set(Coord::new(1, 1), Tile::Ladder).unwrap();

        assert_eq!(parent.get(child.to_other(Coord::new(1, 1), &parent)).unwrap(), Tile::Ladder);
        assert_eq!(parent.get(Coord::new(3, 4)).unwrap(), Tile::Ladder);
        assert_eq!(grid.get(Coord::new(4, 5)), Some(Tile::Ladder));
    }

    #[test]
    fn coordinates_translate_between_spaces() {
        let grid = grid(8, 8);
        let view = grid.view().subview(Some(Coord::new(2, 3)), None).unwrap();
        let local = Coord::new(1, 2);
        assert_eq!(view.to_grid(local), Coord::new(3, 5));
        assert_eq!(view.from_grid(Coord::new(3, 5)), local);
        assert_eq!(view.from_grid(view.to_grid(local)), local);
        assert_eq!(view.from_grid(Coord::ZERO), Coord::new(-2, -3));
        assert_eq!(view.to_other(local, &grid.view()), Coord::new(3, 5));
    }

    #[test]
    fn subview_must_fit_parent() {
        let grid = grid(6, 6);
        let view = grid.view();
        assert!(view.subview(Some(Coord::new(2, 2)), Some(Coord::new(7, 3))).is_err());
        assert!(view.subview(Some(Coord::new(3, 3)), Some(Coord::new(3, 4))).is_err());
        let whole = view.subview(None, None).unwrap();
        assert_eq!(whole.size(), Coord::new(6, 6));
    }

    #[test]
    fn split_x_partitions_ten_by_ten() {
        let grid = grid(10, 10);
        let (left, right) = grid.view().split_x(4).unwrap();
        assert_eq!((left.width(), left.height()), (4, 10));
        assert_eq!((right.width(), right.height()), (6, 10));

        let mut covered = vec![0; 100];
        for view in [left, right] {
            for local in Coord::range(Coord::ZERO, view.size()) {
                let pos = view.to_grid(local);
                covered[(pos.y * 10 + pos.x) as usize] += 1;
            }
        }
        assert!(covered.iter().all(|&n| n == 1));
    }

    #[test]
    fn split_requires_interior_offset() {
        let grid = grid(4, 4);
        let view = grid.view();
        assert!(view.split_x(0).is_err());
        assert!(view.split_x(4).is_err());
        assert!(view.split_y(0).is_err());
        let (top, bottom) = view.split_y(1).unwrap();
        assert_eq!(top.height(), 1);
        assert_eq!(bottom.top_left(), Coord::new(0, 1));
    }

    #[test]
    fn fill_stays_inside_view() {
        let grid = grid(4, 4);
        let (_, right) = grid.view().split_x(2).unwrap();
        right.fill(Tile::Wall);
        let tiles: Vec<_> = grid.tiles().collect();
        assert_eq!(tiles.iter().filter(|t| **t == Tile::Wall).count(), 8);
        assert_eq!(grid.get(Coord::new(1, 3)), Some(Tile::Empty));
        assert!(right.contains_tile(Tile::Wall));
        assert!(!right.contains_tile(Tile::Empty));
    }

    #[test]
    fn find_yields_local_coords_in_row_major_order() {
        let grid = TileGrid::from_ascii(&["....", ".#..", "...#"]).unwrap();
        let view = grid.view().subview(Some(Coord::new(1, 1)), None).unwrap();
        let found: Vec<_> = view
            .find(|v, c| v.try_get(c).filter(|t| t.is_solid()))
            .collect();
        assert_eq!(
            found,
            vec![(Coord::new(0, 0), Tile::Wall), (Coord::new(2, 1), Tile::Wall)]
        );
    }

    #[test]
    fn cast_until_walks_to_first_match() {
        let grid = TileGrid::from_ascii(&["...", "...", "===", "..."]).unwrap();
        let view = grid.view();
        let hit = view
            .cast_until(Coord::new(1, 0), Coord::Y, |v, c| v.try_get(c) == Some(Tile::Floor))
            .unwrap();
        assert_eq!(hit, Coord::new(1, 2));

        let miss = view.cast_until(Coord::new(0, 3), -Coord::X, |v, c| {
            v.try_get(c) == Some(Tile::Wall)
        });
        assert_eq!(
            miss,
            Err(GridError::NotFound {
                start: Coord::new(0, 3),
                direction: -Coord::X
            })
        );

        let stuck = view.cast_until(Coord::new(0, 0), Coord::ZERO, |_, _| false);
        assert!(stuck.unwrap_err().is_not_found());
    }

    #[test]
    fn linearize_and_display_are_row_major() {
        let grid = TileGrid::from_ascii(&["^.", "#="]).unwrap();
        let view = grid.view();
        let tiles: Vec<_> = view.linearize().collect();
        assert_eq!(tiles, vec![Tile::Ceiling, Tile::Empty, Tile::Wall, Tile::Floor]);
        assert_eq!(view.to_string(), "^.\n#=\n");
    }

    #[test]
    fn blit_and_copy() {
        let grid = TileGrid::from_ascii(&["#=..", "^H.."]).unwrap();
        let (left, right) = grid.view().split_x(2).unwrap();
        right.blit(&left).unwrap();
        assert_eq!(grid.view().to_string(), "#=#=\n^H^H\n");

        let snapshot = right.copy().unwrap();
        right.fill(Tile::Empty);
        assert_eq!(snapshot.view().to_string(), "#=\n^H\n");

        let narrow = grid.view().subview(None, Some(Coord::new(1, 2))).unwrap();
        assert!(right.blit(&narrow).is_err());
    }
}

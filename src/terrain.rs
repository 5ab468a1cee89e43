use crate::error::GridError;
use crate::location::*;
use crate::view::View;
use bitflags::*;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        const NONE = 0;
        /// Blocks passage.
        const SOLID = 1;
        /// Solid rock or masonry: what stair and ladder geometry treats as solid.
        const STRUCTURAL = 2;
        /// Something a walker can stand on.
        const SUPPORT = 4;
        const CLIMBABLE = 8;
        const OPEN = 16;
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Empty = 0,
    Floor = 1,
    Ceiling = 2,
    Wall = 3,
    Ladder = 4,
    Stair = 5,
}

impl Tile {
    pub const ALL: [Tile; 6] = [
        Tile::Empty,
        Tile::Floor,
        Tile::Ceiling,
        Tile::Wall,
        Tile::Ladder,
        Tile::Stair,
    ];

    pub fn flags(self) -> TileFlags {
        match self {
            Tile::Empty => TileFlags::OPEN,
            Tile::Floor | Tile::Ceiling | Tile::Wall => {
                TileFlags::SOLID | TileFlags::STRUCTURAL | TileFlags::SUPPORT
            }
            Tile::Stair => TileFlags::SOLID | TileFlags::SUPPORT,
            Tile::Ladder => TileFlags::CLIMBABLE,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self.flags().contains(TileFlags::SOLID)
    }

    /// Solid, not counting stairs.
    #[inline]
    pub fn is_structural(self) -> bool {
        self.flags().contains(TileFlags::STRUCTURAL)
    }

    #[inline]
    pub fn is_support(self) -> bool {
        self.flags().contains(TileFlags::SUPPORT)
    }

    pub fn glyph(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Floor => '=',
            Tile::Ceiling => '^',
            Tile::Wall => '#',
            Tile::Ladder => 'H',
            Tile::Stair => '/',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Tile> {
        Tile::ALL.iter().copied().find(|t| t.glyph() == glyph)
    }
}

/// Cardinal neighbor offsets: up, down, left, right.
pub const NEIGHBORS_4: [Coord; 4] = [
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(-1, 0),
    Coord::new(1, 0),
];

/// Row-major tile storage shared by every view of a level.
///
/// Cells are interior-mutable so that any number of views may read and write
/// the same buffer through a shared borrow. Writes through one view are
/// visible through every other view covering the same cells.
#[derive(Clone, Debug)]
pub struct TileGrid {
    width: i32,
    height: i32,
    tiles: Vec<Cell<Tile>>,
}

impl TileGrid {
    /// Create an all-`Empty` grid.
    pub fn new(width: i32, height: i32) -> Result<TileGrid, GridError> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(TileGrid {
            width,
            height,
            tiles: vec![Cell::new(Tile::Empty); (width as usize) * (height as usize)],
        })
    }

    /// Parse a grid from rows of tile glyphs. A row longer or shorter than the
    /// first is out of range; an unknown glyph is `UnknownGlyph`.
    pub fn from_ascii(rows: &[&str]) -> Result<TileGrid, GridError> {
        let height = rows.len() as i32;
        let width = rows.first().map(|r| r.chars().count() as i32).unwrap_or(0);
        let grid = TileGrid::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() as i32 != width {
                let at = Coord::new(chars.len() as i32, y as i32);
                return Err(GridError::out_of_range(at, at + Coord::new(1, 1), width, height));
            }
            for (x, glyph) in chars.into_iter().enumerate() {
                let at = Coord::new(x as i32, y as i32);
                let tile = Tile::from_glyph(glyph).ok_or(GridError::UnknownGlyph { glyph, at })?;
                grid.store(at, tile);
            }
        }

        Ok(grid)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn size(&self) -> Coord {
        Coord::new(self.width, self.height)
    }

    /// View covering the whole grid.
    pub fn view(&self) -> View<'_> {
        View::whole(self)
    }

    /// Read at grid coordinates.
    pub fn get(&self, pos: Coord) -> Option<Tile> {
        self.index(pos).map(|i| self.tiles[i].get())
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().map(Cell::get)
    }

    #[inline]
    fn index(&self, pos: Coord) -> Option<usize> {
        if pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height {
            Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
        } else {
            None
        }
    }

    /// Unchecked-by-contract read used by views after their own bounds check.
    #[inline]
    pub(crate) fn load(&self, pos: Coord) -> Tile {
        self.index(pos)
            .map(|i| self.tiles[i].get())
            .unwrap_or(Tile::Empty)
    }

    #[inline]
    pub(crate) fn store(&self, pos: Coord, tile: Tile) {
        if let Some(i) = self.index(pos) {
            self.tiles[i].set(tile);
        }
    }
}

impl PartialEq for TileGrid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.tiles().eq(other.tiles())
    }
}

impl Eq for TileGrid {}

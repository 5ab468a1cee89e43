use crate::location::*;
use crate::room::RoomRect;
use crate::terrain::Tile;
use std::fmt;

/// Sink for drawing a finished level. Only tiles are required; room outlines
/// and walk graph edges are optional overlays.
pub trait LevelVisualizer {
    fn render_tile(&mut self, pos: Coord, tile: Tile);

    fn render_room(&mut self, _room: &RoomRect) {}

    fn render_edge(&mut self, _from: Coord, _to: Coord) {}
}

/// Renders tiles as their glyphs, one text row per grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AsciiVisualizer {
    width: i32,
    cells: Vec<char>,
    /// Mark walk graph cells with `*` instead of their tile glyph.
    show_walk_graph: bool,
}

impl AsciiVisualizer {
    pub fn new(width: i32, height: i32) -> Self {
        let len = (width.max(0) * height.max(0)) as usize;
        AsciiVisualizer {
            width: width.max(0),
            cells: vec![' '; len],
            show_walk_graph: false,
        }
    }

    pub fn with_walk_graph(mut self) -> Self {
        self.show_walk_graph = true;
        self
    }

    fn index(&self, pos: Coord) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width {
            return None;
        }
        let index = (pos.y * self.width + pos.x) as usize;
        (index < self.cells.len()).then_some(index)
    }

    fn put(&mut self, pos: Coord, glyph: char) {
        if let Some(index) = self.index(pos) {
            self.cells[index] = glyph;
        }
    }
}

impl LevelVisualizer for AsciiVisualizer {
    fn render_tile(&mut self, pos: Coord, tile: Tile) {
        self.put(pos, tile.glyph());
    }

    fn render_edge(&mut self, from: Coord, to: Coord) {
        if self.show_walk_graph {
            self.put(from, '*');
            self.put(to, '*');
        }
    }
}

impl fmt::Display for AsciiVisualizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.width as usize) {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

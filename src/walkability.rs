//! Walk graph: which cells a walker starting at the seed can get to, and how.
//!
//! Built by an iterative depth-first flood from the seed over walkable cells.
//! Moves are single steps to a walkable neighbour, stepping up onto a stair
//! beside the walker, and dropping off a ledge onto the floor below. The
//! result is a directed adjacency map; pockets the seed cannot reach are not
//! in it.

use crate::filters;
use crate::location::*;
use crate::terrain::*;
use crate::view::View;
use fnv::FnvHashMap;
use log::*;
use pathfinding::directed::bfs::{bfs, bfs_reach};

/// Whether a walker can occupy `pos`.
pub fn is_walkable(view: &View<'_>, pos: Coord) -> bool {
    let above = view.try_get(pos - Coord::Y);
    let below = view.try_get(pos + Coord::Y);
    match view.try_get(pos) {
        Some(Tile::Empty) => above == Some(Tile::Empty) && below.is_some_and(Tile::is_support),
        Some(Tile::Ladder) => {
            matches!(above, Some(Tile::Empty | Tile::Ladder))
                && below.is_some_and(|t| t == Tile::Ladder || t.is_solid())
        }
        _ => false,
    }
}

/// Fall from `pos` to the first walkable cell below it. None if something
/// unwalkable is hit first or the fall leaves the grid.
fn land_from(view: &View<'_>, pos: Coord) -> Option<Coord> {
    let hit = view
        .cast_until(pos, Coord::Y, |v, c| is_walkable(v, c) || !v.try_get(c).is_some_and(Tile::is_empty))
        .ok()?;
    is_walkable(view, hit).then_some(hit)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WalkGraph {
    seed: Option<Coord>,
    edges: FnvHashMap<Coord, Vec<Coord>>,
}

impl WalkGraph {
    /// Flood the finished grid from its seed. `max_fall` bounds ledge drops.
    pub fn build(view: &View<'_>, max_fall: i32) -> WalkGraph {
        let seed = view
            .find_matching(filters::is_tile(&[Tile::Empty]))
            .next()
            .and_then(|first| land_from(view, first));

        let seed = match seed {
            Some(seed) => seed,
            None => {
                debug!("Walkability: no seed cell, graph is empty");
                return WalkGraph::default();
            }
        };

        let mut edges: FnvHashMap<Coord, Vec<Coord>> = FnvHashMap::default();
        let mut stack = vec![seed];

        while let Some(pos) = stack.pop() {
            if edges.contains_key(&pos) {
                continue;
            }
            let targets = successors(view, pos, max_fall);
            stack.extend(targets.iter().filter(|t| !edges.contains_key(*t)));
            edges.insert(pos, targets);
        }

        debug!("Walkability: {} cells reachable from {}", edges.len(), seed);

        WalkGraph {
            seed: Some(seed),
            edges,
        }
    }

    pub fn seed(&self) -> Option<Coord> {
        self.seed
    }

    pub fn contains(&self, pos: Coord) -> bool {
        self.edges.contains_key(&pos)
    }

    /// Cells directly reachable from `pos`. Empty for cells not in the graph.
    pub fn neighbors(&self, pos: Coord) -> &[Coord] {
        self.edges.get(&pos).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &[Coord])> {
        self.edges.iter().map(|(pos, targets)| (*pos, targets.as_slice()))
    }

    /// Every cell reachable from `start`, including `start` itself when it is
    /// in the graph.
    pub fn reachable_from(&self, start: Coord) -> Vec<Coord> {
        if !self.contains(start) {
            return Vec::new();
        }
        bfs_reach(start, |pos| self.neighbors(*pos).to_vec()).collect()
    }

    /// Shortest route by move count, both ends included.
    pub fn path(&self, from: Coord, to: Coord) -> Option<Vec<Coord>> {
        if !self.contains(from) {
            return None;
        }
        bfs(&from, |pos| self.neighbors(*pos).to_vec(), |pos| *pos == to)
    }

    /// The graph cell nearest to `pos`.
    pub fn closest(&self, pos: Coord) -> Option<Coord> {
        // Sorted so ties resolve the same way on every run.
        let mut cells: Vec<Coord> = self.edges.keys().copied().collect();
        cells.sort_by_key(|c| (c.y, c.x));
        cells.into_iter().reduce(filters::closest_to(pos))
    }
}

fn successors(view: &View<'_>, pos: Coord, max_fall: i32) -> Vec<Coord> {
    let mut targets: Vec<Coord> = Vec::new();
    let mut push = |target: Coord| {
        if target != pos && !targets.contains(&target) {
            targets.push(target);
        }
    };

    for offset in NEIGHBORS_4 {
        let next = pos + offset;
        if is_walkable(view, next) {
            push(next);
        }
    }

    for offset in [-Coord::X, Coord::X] {
        let next = pos + offset;
        if is_walkable(view, next) {
            continue;
        }
        match view.try_get(next) {
            Some(Tile::Stair) => {
                let step = next - Coord::Y;
                if is_walkable(view, step) {
                    push(step);
                }
            }
            Some(Tile::Empty) if view.try_get(next + Coord::Y) == Some(Tile::Empty) => {
                match land_from(view, next) {
                    Some(landing) if landing.y - next.y <= max_fall => push(landing),
                    Some(landing) => {
                        trace!("Walkability: drop from {} to {} is too far", next, landing)
                    }
                    None => {}
                }
            }
            _ => {}
        }
    }

    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(rows: &[&str], max_fall: i32) -> (TileGrid, WalkGraph) {
        let grid = TileGrid::from_ascii(rows).unwrap();
        let graph = WalkGraph::build(&grid.view(), max_fall);
        (grid, graph)
    }

    #[test]
    fn walks_along_a_floor() {
        let (_, graph) = graph(&["#....#", "#....#", "######"], 4);
        assert_eq!(graph.seed(), Some(Coord::new(1, 1)));
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.neighbors(Coord::new(2, 1)), &[Coord::new(1, 1), Coord::new(3, 1)]);
        assert_eq!(
            graph.path(Coord::new(1, 1), Coord::new(4, 1)).map(|p| p.len()),
            Some(4)
        );
    }

    #[test]
    fn climbs_stairs_and_drops_off_ledges() {
        let (_, graph) = graph(
            &[
                "#......#",
                "#......#",
                "#......#",
                "#......#",
                "#...../#",
                "########",
            ],
            4,
        );
        // Step up onto the stair, then back down off its edge.
        assert!(graph.neighbors(Coord::new(5, 4)).contains(&Coord::new(6, 3)));
        assert!(graph.neighbors(Coord::new(6, 3)).contains(&Coord::new(5, 4)));
        assert_eq!(graph.reachable_from(Coord::new(1, 4)).len(), 6);
    }

    #[test]
    fn long_falls_are_dropped() {
        let rows = [
            "..........",
            "..........",
            "==........",
            "..........",
            "..........",
            "..........",
            "..........",
            "==========",
        ];
        let (_, short) = graph(&rows, 6);
        assert_eq!(short.seed(), Some(Coord::new(0, 1)));
        assert!(short.neighbors(Coord::new(1, 1)).contains(&Coord::new(2, 6)));
        assert!(short.contains(Coord::new(9, 6)));

        let (_, long) = graph(&rows, 2);
        assert!(!long.contains(Coord::new(2, 6)));
        assert_eq!(long.len(), 2);
    }

    #[test]
    fn ladders_connect_floors() {
        let (_, graph) = graph(
            &[
                "#.....#",
                "#..H..#",
                "###H###",
                "#..H..#",
                "#..H..#",
                "#######",
            ],
            1,
        );
        let top = Coord::new(3, 1);
        let bottom = Coord::new(3, 4);
        assert!(graph.contains(top));
        assert!(graph.contains(Coord::new(3, 2)));
        assert!(graph.path(top, bottom).is_some());
        assert!(graph.path(bottom, top).is_some());
        assert!(graph.contains(Coord::new(1, 4)));
    }

    #[test]
    fn no_self_edges_and_all_reachable() {
        let (_, graph) = graph(
            &[
                "#........#",
                "#........#",
                "#==......#",
                "#...../..#",
                "#.....=..#",
                "##########",
            ],
            6,
        );
        let seed = graph.seed().unwrap();
        let reachable = graph.reachable_from(seed);
        assert_eq!(reachable.len(), graph.len());
        for (pos, targets) in graph.iter() {
            assert!(!targets.contains(&pos));
        }
    }

    #[test]
    fn closed_grid_has_no_seed() {
        let (_, graph) = graph(&["###", "#.#", "###"], 4);
        assert_eq!(graph.seed(), None);
        assert!(graph.is_empty());
        assert_eq!(graph.closest(Coord::ZERO), None);
    }

    #[test]
    fn closest_prefers_nearer_cells() {
        let (_, graph) = graph(&["#....#", "#....#", "######"], 4);
        assert_eq!(graph.closest(Coord::new(9, 1)), Some(Coord::new(4, 1)));
        assert_eq!(graph.closest(Coord::new(0, 0)), Some(Coord::new(1, 1)));
    }
}

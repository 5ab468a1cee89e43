//! Predicate builders for `View::find` / `View::cast_until`, plus small
//! reductions over their results.

use crate::location::*;
use crate::terrain::*;
use crate::view::View;

/// Matches any of `tiles`.
pub fn is_tile<'t>(tiles: &'t [Tile]) -> impl Fn(&View<'_>, Coord) -> bool + 't {
    move |view: &View<'_>, pos: Coord| view.try_get(pos).is_some_and(|t| tiles.contains(&t))
}

pub fn is_solid() -> impl Fn(&View<'_>, Coord) -> bool {
    |view: &View<'_>, pos: Coord| view.try_get(pos).is_some_and(Tile::is_solid)
}

/// Solid, not counting stairs.
pub fn is_structural() -> impl Fn(&View<'_>, Coord) -> bool {
    |view: &View<'_>, pos: Coord| view.try_get(pos).is_some_and(Tile::is_structural)
}

pub fn is_not<F>(predicate: F) -> impl Fn(&View<'_>, Coord) -> bool
where
    F: Fn(&View<'_>, Coord) -> bool,
{
    move |view: &View<'_>, pos: Coord| !predicate(view, pos)
}

/// Fold step keeping whichever coordinate lies nearer to `reference`.
/// Ties keep the coordinate already held.
pub fn closest_to(reference: Coord) -> impl Fn(Coord, Coord) -> Coord {
    move |best: Coord, candidate: Coord| {
        if (candidate - reference).cmp_to_origin(best - reference).is_lt() {
            candidate
        } else {
            best
        }
    }
}

/// True if `sub` occurs contiguously within `seq`.
pub fn contains_subsequence<T: PartialEq>(seq: &[T], sub: &[T]) -> bool {
    if sub.is_empty() {
        return true;
    }
    seq.windows(sub.len()).any(|w| w == sub)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_predicates() {
        let grid = TileGrid::from_ascii(&["./#", "H=."]).unwrap();
        let view = grid.view();

        let walls: Vec<_> = view.find_matching(is_tile(&[Tile::Wall, Tile::Ladder])).collect();
        assert_eq!(walls, vec![Coord::new(2, 0), Coord::new(0, 1)]);

        let solid: Vec<_> = view.find_matching(is_solid()).collect();
        assert_eq!(solid, vec![Coord::new(1, 0), Coord::new(2, 0), Coord::new(1, 1)]);

        let structural = view.find_matching(is_structural()).count();
        assert_eq!(structural, 2);

        let open = view.find_matching(is_not(is_solid())).count();
        assert_eq!(open, 3);
    }

    #[test]
    fn closest_to_prefers_first_on_ties() {
        let coords = [Coord::new(4, 4), Coord::new(1, 2), Coord::new(3, 0), Coord::new(0, 3)];
        let nearest = coords.iter().copied().reduce(closest_to(Coord::new(1, 1)));
        assert_eq!(nearest, Some(Coord::new(1, 2)));

        let tied = [Coord::new(2, 0), Coord::new(0, 2)];
        assert_eq!(tied.iter().copied().reduce(closest_to(Coord::ZERO)), Some(Coord::new(2, 0)));
    }

    #[test]
    fn subsequence_search_includes_the_tail() {
        let grid = TileGrid::from_ascii(&["..=#"]).unwrap();
        let tiles: Vec<_> = grid.view().linearize().collect();
        assert!(contains_subsequence(&tiles, &[Tile::Floor, Tile::Wall]));
        assert!(contains_subsequence(&tiles, &tiles));
        assert!(!contains_subsequence(&tiles, &[Tile::Wall, Tile::Empty]));
        assert!(contains_subsequence::<Tile>(&tiles, &[]));
    }
}

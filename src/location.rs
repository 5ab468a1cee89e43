use itertools::iproduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Integer grid coordinate. `y` grows downward.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ZERO: Coord = Coord { x: 0, y: 0 };

    /// Unit step along +x.
    pub const X: Coord = Coord { x: 1, y: 0 };

    /// Unit step along +y (downward).
    pub const Y: Coord = Coord { x: 0, y: 1 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }

    /// Iterate the half-open rectangle `[tl, br)` in row-major order.
    pub fn range(tl: Coord, br: Coord) -> impl Iterator<Item = Coord> + Clone {
        iproduct!(tl.y..br.y, tl.x..br.x).map(|(y, x)| Coord::new(x, y))
    }

    pub fn width(a: Coord, b: Coord) -> i32 {
        (a.x - b.x).abs()
    }

    pub fn height(a: Coord, b: Coord) -> i32 {
        (a.y - b.y).abs()
    }

    /// Squared euclidean distance to the origin.
    #[inline]
    pub fn length_squared(self) -> i64 {
        let x = self.x as i64;
        let y = self.y as i64;
        x * x + y * y
    }

    /// Compare distance to the origin.
    pub fn cmp_to_origin(self, other: Coord) -> Ordering {
        self.length_squared().cmp(&other.length_squared())
    }

    pub fn distance_squared_to(self, other: Coord) -> i64 {
        (self - other).length_squared()
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Coord::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Coord {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Coord {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Coord::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Coord {
    type Output = Self;
    fn mul(self, scalar: i32) -> Self {
        Coord::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Coord {
    type Output = Self;
    fn neg(self) -> Self {
        Coord::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Coord::new(3, -2);
        let b = Coord::new(1, 5);
        assert_eq!(a + b, Coord::new(4, 3));
        assert_eq!(a - b, Coord::new(2, -7));
        assert_eq!(-a, Coord::new(-3, 2));
        assert_eq!(Coord::X * 4 + Coord::Y * 2, Coord::new(4, 2));

        let mut c = Coord::ZERO;
        c += Coord::Y;
        c += Coord::Y;
        assert_eq!(c, Coord::new(0, 2));
    }

    #[test]
    fn range_is_row_major_and_half_open() {
        let coords: Vec<_> = Coord::range(Coord::new(1, 1), Coord::new(3, 3)).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(1, 1),
                Coord::new(2, 1),
                Coord::new(1, 2),
                Coord::new(2, 2)
            ]
        );
        assert_eq!(Coord::range(Coord::new(2, 0), Coord::new(2, 5)).count(), 0);
    }

    #[test]
    fn extents_ignore_order() {
        let a = Coord::new(7, 2);
        let b = Coord::new(1, 9);
        assert_eq!(Coord::width(a, b), 6);
        assert_eq!(Coord::width(b, a), 6);
        assert_eq!(Coord::height(a, b), 7);
    }

    #[test]
    fn origin_distance_comparison() {
        assert_eq!(Coord::new(3, 4).length_squared(), 25);
        assert_eq!(Coord::new(1, 1).cmp_to_origin(Coord::new(0, 2)), Ordering::Less);
        assert_eq!(Coord::new(-3, 0).cmp_to_origin(Coord::new(0, 3)), Ordering::Equal);
        assert_eq!(Coord::new(5, 0).distance_squared_to(Coord::new(2, 4)), 25);
    }
}

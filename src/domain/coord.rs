use std::fmt;

/// Offsets of the Moore neighborhood, column by column:
///
/// ```text
///  0 3 5
///  1 c 6
///  2 4 7
/// ```
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell position on the plane. Not necessarily inside any grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift by the given delta. Saturates instead of overflowing at the
    /// edges of `i32`, which keeps far-away coordinates out of any grid.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The 8 coordinates at Chebyshev distance 1 from `coord`, in a fixed order.
/// Nothing wraps: neighbors past an edge are returned as-is.
pub fn neighbors_of(coord: Coord) -> [Coord; 8] {
    MOORE_OFFSETS.map(|(dx, dy)| coord.offset(dx, dy))
}

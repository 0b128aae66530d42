//! Axial hex coordinates.
//!
//! Cells are addressed by `(q, r)` where `q` is the map column and `r` the
//! row. The third cube component is derived on demand, which keeps the cube
//! invariant `q + r + s == 0` impossible to violate.

use std::fmt;

use bevy::prelude::Reflect;

/// Offsets to the six adjacent hexes, counter-clockwise from east.
const NEIGHBOR_OFFSETS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Axial coordinate of a hex cell.
///
/// A plain value type: identity, equality, and hashing are `(q, r)` only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Reflect)]
pub struct HexCoord {
    /// Column.
    pub q: i32,
    /// Row.
    pub r: i32,
}

impl HexCoord {
    /// The origin cell, `(0, 0)`.
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Coordinate at column `q`, row `r`.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube component, always `-(q + r)`.
    pub const fn s(self) -> i32 {
        -(self.q + self.r)
    }

    /// Hex-grid distance to `other` in cells.
    pub fn distance_to(self, other: Self) -> i32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        (dq + dr + ds) / 2
    }

    /// The six adjacent coordinates, unbounded by any map.
    pub fn all_neighbors(self) -> [Self; 6] {
        NEIGHBOR_OFFSETS.map(|(dq, dr)| Self::new(self.q + dq, self.r + dr))
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q:{} R:{}", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── cube invariant ──────────────────────────────────────────────

    #[test]
    fn s_is_negative_sum_of_q_and_r() {
        assert_eq!(HexCoord::new(0, 0).s(), 0);
        assert_eq!(HexCoord::new(3, 2).s(), -5);
        assert_eq!(HexCoord::new(-4, 1).s(), 3);
    }

    #[test]
    fn cube_components_sum_to_zero() {
        for q in -5..=5 {
            for r in -5..=5 {
                let c = HexCoord::new(q, r);
                assert_eq!(c.q + c.r + c.s(), 0);
            }
        }
    }

    // ── distance ────────────────────────────────────────────────────

    #[test]
    fn distance_along_axes() {
        assert_eq!(HexCoord::ZERO.distance_to(HexCoord::new(3, 0)), 3);
        assert_eq!(HexCoord::ZERO.distance_to(HexCoord::new(0, 3)), 3);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = HexCoord::new(2, -1);
        let b = HexCoord::new(-3, 4);
        assert_eq!(a.distance_to(b), b.distance_to(a));
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = HexCoord::new(7, -2);
        assert_eq!(c.distance_to(c), 0);
    }

    // ── neighbors ───────────────────────────────────────────────────

    #[test]
    fn neighbors_are_six_distinct_cells_at_distance_one() {
        let center = HexCoord::new(4, -1);
        let neighbors = center.all_neighbors();
        for (i, n) in neighbors.iter().enumerate() {
            assert_eq!(center.distance_to(*n), 1);
            for other in neighbors.iter().skip(i + 1) {
                assert_ne!(n, other);
            }
        }
    }

    // ── display ─────────────────────────────────────────────────────

    #[test]
    fn display_shows_column_and_row() {
        assert_eq!(HexCoord::new(5, 3).to_string(), "Q:5 R:3");
    }
}

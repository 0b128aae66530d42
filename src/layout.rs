//! Hex sizing constants and the axial-to-world projection.
//!
//! All spacing math in the crate flows through [`HexLayout`], built once
//! from the configured hex radius and read-only afterwards.

use bevy::prelude::Vec3;

use crate::hex::HexCoord;

/// Spacing constants for a grid of pointy-top hexes.
///
/// `radius` is the center-to-corner distance in world units. Columns are
/// `√3 · radius` apart on x, rows `1.5 · radius` apart on z.
///
/// # Examples
/// ```
/// # use hex_map::{HexCoord, HexLayout};
/// let layout = HexLayout::new(1.0);
/// let p = layout.position(HexCoord::new(1, 0));
/// assert!((p.x - 3.0_f32.sqrt()).abs() < 1e-6);
/// assert_eq!((p.y, p.z), (0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HexLayout {
    radius: f32,
    horizontal_spacing: f32,
    vertical_spacing: f32,
}

impl HexLayout {
    /// Derives all spacing constants from the hex radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            horizontal_spacing: 3.0_f32.sqrt() * radius,
            vertical_spacing: 1.5 * radius,
        }
    }

    // ── Hex dimensions ─────────────────────────────────────────────

    /// Center-to-corner radius the layout was built from.
    pub fn hex_radius(&self) -> f32 {
        self.radius
    }

    /// Corner-to-corner height of a single hex.
    pub fn hex_height(&self) -> f32 {
        self.radius * 2.0
    }

    /// Edge-to-edge width of a single hex; equal to the column spacing.
    pub fn hex_width(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Distance along x between two adjacent columns.
    pub fn horizontal_spacing(&self) -> f32 {
        self.horizontal_spacing
    }

    /// Distance along z between two adjacent rows, 3/4 of the hex height.
    pub fn vertical_spacing(&self) -> f32 {
        self.vertical_spacing
    }

    // ── Projection ─────────────────────────────────────────────────

    /// World-space position of a hex center on the `y = 0` plane.
    ///
    /// Each row shifts east by half a column, so the full grid shears into
    /// a rhombus rather than stacking rows into a rectangle.
    pub fn position(&self, coord: HexCoord) -> Vec3 {
        Vec3::new(
            self.horizontal_spacing * (coord.q as f32 + coord.r as f32 / 2.0),
            0.0,
            self.vertical_spacing * coord.r as f32,
        )
    }

    // ── Map extents ────────────────────────────────────────────────

    /// Total width spanned by `columns` columns.
    pub fn map_width(&self, columns: i32) -> f32 {
        self.horizontal_spacing * columns as f32
    }

    /// Total height spanned by `rows` rows.
    pub fn map_height(&self, rows: i32) -> f32 {
        self.vertical_spacing * rows as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    // ── projection anchors ──────────────────────────────────────────

    #[test]
    fn origin_projects_to_origin() {
        let layout = HexLayout::new(1.0);
        assert_eq!(layout.position(HexCoord::ZERO), Vec3::ZERO);
    }

    #[test]
    fn one_column_east_is_one_horizontal_spacing() {
        let layout = HexLayout::new(1.0);
        let p = layout.position(HexCoord::new(1, 0));
        assert!((p.x - 3.0_f32.sqrt()).abs() < EPS);
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn one_row_north_shifts_half_a_column() {
        let layout = HexLayout::new(1.0);
        let p = layout.position(HexCoord::new(0, 1));
        assert!((p.x - 3.0_f32.sqrt() / 2.0).abs() < EPS);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 1.5).abs() < EPS);
    }

    #[test]
    fn row_offset_uses_float_halves() {
        // Two rows up shifts by exactly one full column, not by an
        // integer-truncated amount per row.
        let layout = HexLayout::new(1.0);
        let p = layout.position(HexCoord::new(0, 2));
        assert!((p.x - layout.horizontal_spacing()).abs() < EPS);
    }

    // ── dimension relations ─────────────────────────────────────────

    #[test]
    fn width_equals_horizontal_spacing() {
        let layout = HexLayout::new(2.5);
        assert_eq!(layout.hex_width(), layout.horizontal_spacing());
    }

    #[test]
    fn vertical_spacing_is_three_quarters_of_height() {
        let layout = HexLayout::new(2.5);
        assert!((layout.vertical_spacing() - 0.75 * layout.hex_height()).abs() < EPS);
    }

    #[test]
    fn height_is_twice_the_radius() {
        let layout = HexLayout::new(2.5);
        assert_eq!(layout.hex_radius(), 2.5);
        assert_eq!(layout.hex_height(), 5.0);
    }

    // ── map extents ─────────────────────────────────────────────────

    #[test]
    fn map_extents_scale_with_cell_counts() {
        let layout = HexLayout::new(1.0);
        assert!((layout.map_width(20) - 20.0 * layout.horizontal_spacing()).abs() < EPS);
        assert!((layout.map_height(10) - 15.0).abs() < EPS);
    }
}

//! Camera-relative wrapping of hex world positions.
//!
//! On a wrapping map every hex has infinitely many periodic copies, one per
//! whole map extent. Renderers should place the copy nearest the camera so
//! that scrolling across the seam shows the far edge of the map instead of
//! empty space. Only rendered positions wrap; the visible-cell window is
//! computed on unwrapped grid indices.

use bevy::prelude::Vec3;

use crate::layout::HexLayout;

/// Projects hex positions onto their nearest periodic copy relative to a
/// camera, independently per enabled axis.
#[derive(Clone, Copy, Debug)]
pub struct WrapProjector {
    map_width: f32,
    map_height: f32,
    wrap_east_west: bool,
    wrap_north_south: bool,
}

impl WrapProjector {
    /// Builds a projector for a `columns x rows` map laid out by `layout`.
    pub fn new(
        layout: &HexLayout,
        columns: i32,
        rows: i32,
        wrap_east_west: bool,
        wrap_north_south: bool,
    ) -> Self {
        Self {
            map_width: layout.map_width(columns),
            map_height: layout.map_height(rows),
            wrap_east_west,
            wrap_north_south,
        }
    }

    /// Position of the copy of `position` nearest to `camera`.
    ///
    /// Axes with wrapping disabled pass through unmodified. A camera sitting
    /// exactly on the hex sees the hex where it is.
    pub fn position_from_camera(&self, position: Vec3, camera: Vec3) -> Vec3 {
        let mut wrapped = position;
        if self.wrap_east_west {
            wrapped.x = wrap_axis(position.x, camera.x, self.map_width);
        }
        if self.wrap_north_south {
            wrapped.z = wrap_axis(position.z, camera.z, self.map_height);
        }
        wrapped
    }
}

/// Shifts `value` by whole extents so its offset from `camera` lands in
/// `(-extent / 2, extent / 2]`.
///
/// The half-open interval makes the chosen copy unique for every input,
/// including offsets exactly at half an extent, so repeated projection near
/// the seam can never oscillate between two copies.
fn wrap_axis(value: f32, camera: f32, extent: f32) -> f32 {
    let distance_in_extents = (value - camera) / extent;
    let shift = (distance_in_extents - 0.5).ceil();
    value - shift * extent
}

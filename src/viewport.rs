//! Visible-window computation and recentering.

use bevy::platform::collections::HashSet;

use crate::hex::HexCoord;
use crate::map::MapError;

/// Cells entering and leaving the window across one recenter.
///
/// A renderer only needs to instantiate `entered` and tear down `exited`
/// instead of clearing and redrawing the whole window.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewportDiff {
    /// Cells that became visible.
    pub entered: HashSet<HexCoord>,
    /// Cells that left the window.
    pub exited: HashSet<HexCoord>,
}

/// The windowed view onto the map: a center cell, a window radius, and the
/// cached set of currently visible cells.
#[derive(Clone, Debug)]
pub struct Viewport {
    center: HexCoord,
    radius: i32,
    visible: HashSet<HexCoord>,
    generation: u64,
}

impl Viewport {
    /// Creates a window of `radius` cells around `center` on a
    /// `columns x rows` map.
    ///
    /// Fails with [`MapError::InvalidRadius`] when `radius` is negative.
    pub fn new(center: HexCoord, radius: i32, columns: i32, rows: i32) -> Result<Self, MapError> {
        if radius < 0 {
            return Err(MapError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            visible: visible_cells(center, radius, columns, rows),
            generation: 0,
        })
    }

    /// Current center cell.
    pub fn center(&self) -> HexCoord {
        self.center
    }

    /// Window radius in cells.
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Cells currently inside the window.
    pub fn visible(&self) -> &HashSet<HexCoord> {
        &self.visible
    }

    /// Number of window recomputations since creation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Moves the window to `new_center` and recomputes the visible set.
    ///
    /// Returns the entered/exited diff against the previous set, or `None`
    /// without any recomputation when the center is unchanged: the cached
    /// set is still valid and callers have nothing to redraw.
    pub fn recenter(
        &mut self,
        new_center: HexCoord,
        columns: i32,
        rows: i32,
    ) -> Option<ViewportDiff> {
        if new_center == self.center {
            return None;
        }

        let next = visible_cells(new_center, self.radius, columns, rows);
        let diff = ViewportDiff {
            entered: next.difference(&self.visible).copied().collect(),
            exited: self.visible.difference(&next).copied().collect(),
        };
        self.center = new_center;
        self.visible = next;
        self.generation += 1;
        Some(diff)
    }
}

/// Every cell within `radius` of `center`, clamped to the map bounds.
///
/// Each bound is clamped against the center itself and the east/north side
/// is half-open, so the column and row at exactly `center + radius` are
/// never included and windows shrink near the map edges instead of sliding
/// along them. Wrapping never feeds far-edge cells into the window; only
/// rendered positions wrap.
pub fn visible_cells(center: HexCoord, radius: i32, columns: i32, rows: i32) -> HashSet<HexCoord> {
    let west = (center.q - radius).max(0).min(center.q);
    let east = (center.q + radius).max(center.q).min(columns);
    let south = (center.r - radius).max(0).min(center.r);
    let north = (center.r + radius).max(center.r).min(rows);

    let mut cells = HashSet::new();
    for column in west..east {
        for row in south..north {
            cells.insert(HexCoord::new(column, row));
        }
    }
    cells
}

//! Resources and messages exposed by the map view.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::hex::HexCoord;
use crate::layout::HexLayout;
use crate::map::HexMap;
use crate::pan::PanController;
use crate::viewport::Viewport;
use crate::wrap::WrapProjector;

/// The generated map and the geometry derived from it. Written once at
/// startup, read-only afterwards.
#[derive(Resource)]
pub struct MapData {
    /// Cell table.
    pub map: HexMap,
    /// Spacing constants and axial-to-world projection.
    pub layout: HexLayout,
    /// Camera-relative wrapping for rendered positions.
    pub projector: WrapProjector,
}

impl MapData {
    /// World position of `coord`'s nearest periodic copy relative to
    /// `camera`; the plain unwrapped position on non-wrapping axes.
    pub fn wrapped_position(&self, coord: HexCoord, camera: Vec3) -> Vec3 {
        self.projector
            .position_from_camera(self.layout.position(coord), camera)
    }
}

/// Current window state. Only the drag-handling system writes it.
#[derive(Resource)]
pub struct MapViewport(pub Viewport);

/// Drag state machine.
#[derive(Resource)]
pub struct MapPan(pub PanController);

/// Inbound drag gesture updates, in world coordinates on the map plane.
///
/// Produced by the application's input layer (pointer raycasts, touch, a
/// script); the plugin is device-agnostic.
#[derive(Message, Clone, Copy, Debug)]
pub enum MapDrag {
    /// A gesture started; `touched_cell` is the cell under the pointer, if
    /// the gesture began on one.
    Begin {
        /// Intersection point on the map plane.
        world_point: Vec3,
        /// Cell under the pointer, if any.
        touched_cell: Option<HexCoord>,
    },
    /// The pointer moved while dragging.
    Continue {
        /// Current intersection point.
        world_point: Vec3,
    },
    /// The gesture finished.
    End {
        /// Final intersection point.
        world_point: Vec3,
    },
}

/// Per-frame view translation while a gesture is live. Consumers shift the
/// map (or camera) by `delta`; the visible set does not change.
#[derive(Message, Clone, Copy, Debug)]
pub struct ViewTranslated {
    /// World-space displacement since the previous drag update, `y = 0`.
    pub delta: Vec3,
}

/// The window moved: `entered` cells need instances, `exited` cells can be
/// torn down.
#[derive(Message, Clone, Debug)]
pub struct ViewportChanged {
    /// New window center.
    pub center: HexCoord,
    /// Cells that became visible.
    pub entered: HashSet<HexCoord>,
    /// Cells that left the window.
    pub exited: HashSet<HexCoord>,
}

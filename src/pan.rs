//! Drag-to-recenter state machine.

use bevy::prelude::Vec3;

use crate::hex::HexCoord;
use crate::layout::HexLayout;

/// In-flight gesture bookkeeping, alive between begin and end.
#[derive(Clone, Copy, Debug)]
struct DragState {
    start_point: Vec3,
    last_point: Vec3,
    start_cell: HexCoord,
}

/// Turns world-space drag gestures into discrete recenter candidates.
///
/// Idle until [`Self::begin_drag`]; per-frame [`Self::continue_drag`] deltas
/// let the caller translate the view while the gesture is live;
/// [`Self::end_drag`] decides whether the total displacement crosses the
/// pan threshold and always returns the controller to idle.
#[derive(Debug)]
pub struct PanController {
    threshold: f32,
    drag: Option<DragState>,
}

impl PanController {
    /// `threshold` is the minimum total drag magnitude, in world units, for
    /// a gesture to count as a pan rather than a click.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            drag: None,
        }
    }

    /// Whether a gesture is currently live.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a gesture at `world_point`.
    ///
    /// The eventual recenter is computed relative to `touched_cell` when the
    /// gesture began on a cell, otherwise relative to `current_center`.
    pub fn begin_drag(
        &mut self,
        world_point: Vec3,
        touched_cell: Option<HexCoord>,
        current_center: HexCoord,
    ) {
        self.drag = Some(DragState {
            start_point: world_point,
            last_point: world_point,
            start_cell: touched_cell.unwrap_or(current_center),
        });
    }

    /// Advances a live gesture to `world_point` and returns the displacement
    /// since the previous point, with the vertical component zeroed.
    ///
    /// The caller applies the delta as a continuous view translation; no
    /// grid recompute happens here. Returns [`Vec3::ZERO`] while idle.
    pub fn continue_drag(&mut self, world_point: Vec3) -> Vec3 {
        let Some(drag) = self.drag.as_mut() else {
            return Vec3::ZERO;
        };
        let mut delta = world_point - drag.last_point;
        delta.y = 0.0;
        drag.last_point = world_point;
        delta
    }

    /// Finishes the gesture and returns the candidate new center, clamped to
    /// the map bounds, or `None` when the total displacement stayed within
    /// the threshold (a click, or drag jitter).
    ///
    /// Dragging the view east moves the focus west, so world displacement
    /// and column/row displacement carry opposite signs. The controller is
    /// idle again afterwards regardless of the outcome.
    pub fn end_drag(
        &mut self,
        world_point: Vec3,
        layout: &HexLayout,
        columns: i32,
        rows: i32,
    ) -> Option<HexCoord> {
        let drag = self.drag.take()?;

        let mut delta = world_point - drag.start_point;
        delta.y = 0.0;
        if delta.length() <= self.threshold {
            return None;
        }

        let column_delta = (-delta.x / layout.horizontal_spacing()).round() as i32;
        let row_delta = (-delta.z / layout.vertical_spacing()).round() as i32;
        Some(HexCoord::new(
            (drag.start_cell.q + column_delta).clamp(0, columns - 1),
            (drag.start_cell.r + row_delta).clamp(0, rows - 1),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::{HexMap, TileId};
    use crate::viewport::Viewport;

    fn controller() -> PanController {
        PanController::new(1.0)
    }

    fn layout() -> HexLayout {
        HexLayout::new(1.0)
    }

    // ── state machine ───────────────────────────────────────────────

    #[test]
    fn idle_controller_ignores_continue_and_end() {
        let mut pan = controller();
        assert_eq!(pan.continue_drag(Vec3::new(3.0, 0.0, 3.0)), Vec3::ZERO);
        assert!(pan.end_drag(Vec3::new(9.0, 0.0, 9.0), &layout(), 20, 20).is_none());
    }

    #[test]
    fn continue_yields_per_frame_deltas_with_y_zeroed() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, None, HexCoord::ZERO);
        assert!(pan.is_dragging());

        let delta = pan.continue_drag(Vec3::new(1.0, 0.5, 2.0));
        assert_eq!(delta, Vec3::new(1.0, 0.0, 2.0));

        // Same point again: the view already moved, nothing left to apply.
        assert_eq!(pan.continue_drag(Vec3::new(1.0, 0.5, 2.0)), Vec3::ZERO);
    }

    #[test]
    fn end_returns_to_idle_even_when_nothing_happens() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, None, HexCoord::ZERO);
        assert!(pan.end_drag(Vec3::ZERO, &layout(), 20, 20).is_none());
        assert!(!pan.is_dragging());
    }

    // ── threshold ───────────────────────────────────────────────────

    #[test]
    fn sub_threshold_drag_is_a_click() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), HexCoord::ZERO);
        assert!(pan.end_drag(Vec3::new(0.5, 0.0, 0.0), &layout(), 20, 20).is_none());
    }

    #[test]
    fn displacement_exactly_at_threshold_still_counts_as_a_click() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), HexCoord::ZERO);
        assert!(pan.end_drag(Vec3::new(1.0, 0.0, 0.0), &layout(), 20, 20).is_none());
    }

    // ── recenter candidates ─────────────────────────────────────────

    #[test]
    fn dragging_west_moves_the_focus_east() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), HexCoord::ZERO);
        // 5.2 world units is three columns of √3 ≈ 1.732 spacing.
        let candidate = pan.end_drag(Vec3::new(-5.2, 0.0, 0.0), &layout(), 20, 20);
        assert_eq!(candidate, Some(HexCoord::new(8, 5)));
    }

    #[test]
    fn dragging_south_moves_the_focus_north() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), HexCoord::ZERO);
        // 3.1 world units is two rows of 1.5 spacing.
        let candidate = pan.end_drag(Vec3::new(0.0, 0.0, -3.1), &layout(), 20, 20);
        assert_eq!(candidate, Some(HexCoord::new(5, 7)));
    }

    #[test]
    fn vertical_displacement_is_ignored() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), HexCoord::ZERO);
        let candidate = pan.end_drag(Vec3::new(-5.2, 7.3, 0.0), &layout(), 20, 20);
        assert_eq!(candidate, Some(HexCoord::new(8, 5)));
    }

    #[test]
    fn candidates_clamp_to_the_map_bounds() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(18, 1)), HexCoord::ZERO);
        let candidate = pan.end_drag(Vec3::new(-50.0, 0.0, 50.0), &layout(), 20, 20);
        assert_eq!(candidate, Some(HexCoord::new(19, 0)));
    }

    #[test]
    fn gesture_off_any_cell_falls_back_to_the_current_center() {
        let mut pan = controller();
        pan.begin_drag(Vec3::ZERO, None, HexCoord::new(10, 10));
        let candidate = pan.end_drag(Vec3::new(-1.8, 0.0, 0.0), &layout(), 20, 20);
        assert_eq!(candidate, Some(HexCoord::new(11, 10)));
    }

    // ── full gesture against map and viewport ───────────────────────

    #[test]
    fn a_long_drag_recenters_the_window() {
        let map = HexMap::generate(20, 20, &mut |_: HexCoord| TileId(0)).unwrap();
        let mut viewport = Viewport::new(HexCoord::ZERO, 1, 20, 20).unwrap();
        let mut pan = controller();

        let touched = map.get(5, 5).unwrap().coord;
        pan.begin_drag(Vec3::ZERO, Some(touched), viewport.center());
        let candidate = pan
            .end_drag(Vec3::new(-5.2, 0.0, 0.0), &layout(), map.columns(), map.rows())
            .unwrap();

        let diff = viewport.recenter(candidate, map.columns(), map.rows()).unwrap();
        assert_eq!(viewport.center(), HexCoord::new(8, 5));
        let expected: Vec<HexCoord> = [(7, 4), (7, 5), (8, 4), (8, 5)]
            .iter()
            .map(|&(q, r)| HexCoord::new(q, r))
            .collect();
        assert_eq!(viewport.visible().len(), 4);
        for cell in &expected {
            assert!(viewport.visible().contains(cell), "{cell} missing");
            assert!(diff.entered.contains(cell));
        }
    }

    #[test]
    fn a_jittery_click_leaves_the_window_alone() {
        let mut viewport = Viewport::new(HexCoord::new(5, 5), 1, 20, 20).unwrap();
        let mut pan = controller();

        pan.begin_drag(Vec3::ZERO, Some(HexCoord::new(5, 5)), viewport.center());
        let candidate = pan.end_drag(Vec3::new(0.3, 0.0, 0.4), &layout(), 20, 20);

        assert!(candidate.is_none());
        assert_eq!(viewport.center(), HexCoord::new(5, 5));
        assert_eq!(viewport.generation(), 0);
    }
}

//! Startup generation and drag handling.

use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::MapViewConfig;
use super::entities::{MapData, MapDrag, MapPan, MapViewport, ViewTranslated, ViewportChanged};
use crate::hex::HexCoord;
use crate::layout::HexLayout;
use crate::map::{HexMap, RandomTileChooser};
use crate::pan::PanController;
use crate::viewport::Viewport;
use crate::wrap::WrapProjector;

/// Generates the map and the initial window, and announces the first
/// visible set so renderers can draw it.
///
/// On invalid configuration this logs the refusal and inserts nothing; the
/// application decides what to do about a view that never appeared.
pub fn setup_map(
    mut commands: Commands,
    cfg: Res<MapViewConfig>,
    mut changes: MessageWriter<ViewportChanged>,
) {
    if cfg.tile_palette_len == 0 {
        error!("map view refused to start: tile palette is empty");
        return;
    }

    let mut chooser = RandomTileChooser::new(cfg.tile_palette_len, cfg.tile_seed);
    let map = match HexMap::generate(cfg.columns, cfg.rows, &mut chooser) {
        Ok(map) => map,
        Err(err) => {
            error!("map view refused to start: {err}");
            return;
        }
    };

    let viewport = match Viewport::new(HexCoord::ZERO, cfg.window_radius, cfg.columns, cfg.rows) {
        Ok(viewport) => viewport,
        Err(err) => {
            error!("map view refused to start: {err}");
            return;
        }
    };

    let layout = HexLayout::new(cfg.hex_radius);
    let projector = WrapProjector::new(
        &layout,
        cfg.columns,
        cfg.rows,
        cfg.wrap_east_west,
        cfg.wrap_north_south,
    );

    info!(
        "generated {}x{} map, showing {} cells around {}",
        cfg.columns,
        cfg.rows,
        viewport.visible().len(),
        viewport.center()
    );
    changes.write(ViewportChanged {
        center: viewport.center(),
        entered: viewport.visible().clone(),
        exited: HashSet::new(),
    });

    commands.insert_resource(MapData {
        map,
        layout,
        projector,
    });
    commands.insert_resource(MapViewport(viewport));
    commands.insert_resource(MapPan(PanController::new(cfg.drag_threshold)));
}

/// Feeds drag messages through the pan controller and recenters the window
/// when a gesture lands on a new center.
pub fn handle_drag(
    mut drags: MessageReader<MapDrag>,
    data: Option<Res<MapData>>,
    viewport: Option<ResMut<MapViewport>>,
    pan: Option<ResMut<MapPan>>,
    mut translations: MessageWriter<ViewTranslated>,
    mut changes: MessageWriter<ViewportChanged>,
) {
    let (Some(data), Some(mut viewport), Some(mut pan)) = (data, viewport, pan) else {
        return;
    };

    for drag in drags.read() {
        match *drag {
            MapDrag::Begin {
                world_point,
                touched_cell,
            } => {
                pan.0.begin_drag(world_point, touched_cell, viewport.0.center());
            }
            MapDrag::Continue { world_point } => {
                let delta = pan.0.continue_drag(world_point);
                if delta != Vec3::ZERO {
                    translations.write(ViewTranslated { delta });
                }
            }
            MapDrag::End { world_point } => {
                let Some(candidate) = pan.0.end_drag(
                    world_point,
                    &data.layout,
                    data.map.columns(),
                    data.map.rows(),
                ) else {
                    continue;
                };
                let Some(diff) =
                    viewport
                        .0
                        .recenter(candidate, data.map.columns(), data.map.rows())
                else {
                    continue;
                };
                info!(
                    "recentered on {}: {} cells entered, {} exited",
                    candidate,
                    diff.entered.len(),
                    diff.exited.len()
                );
                changes.write(ViewportChanged {
                    center: candidate,
                    entered: diff.entered,
                    exited: diff.exited,
                });
            }
        }
    }
}

//! Bevy integration: map resources, drag messages, and recenter events.
//!
//! The plugin owns no rendering. It generates the map once at startup,
//! consumes [`MapDrag`] messages from whatever input layer the application
//! provides, and publishes [`ViewTranslated`] and [`ViewportChanged`]
//! messages plus wrapped world positions for a renderer to act on.

mod entities;
mod systems;

pub use entities::{MapData, MapDrag, MapPan, MapViewport, ViewTranslated, ViewportChanged};

use bevy::prelude::*;

/// Configuration for the windowed map view.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct MapViewConfig {
    /// Number of map columns.
    pub columns: i32,
    /// Number of map rows.
    pub rows: i32,
    /// Hex radius (center to corner) in world units.
    pub hex_radius: f32,
    /// How many cells to show around the window center.
    pub window_radius: i32,
    /// Wrap rendered positions across the east-west map edge.
    pub wrap_east_west: bool,
    /// Wrap rendered positions across the north-south map edge.
    pub wrap_north_south: bool,
    /// Minimum drag displacement, in world units, that counts as a pan.
    pub drag_threshold: f32,
    /// Number of tiles in the renderer's material palette.
    pub tile_palette_len: usize,
    /// Seed for the random tile assignment.
    pub tile_seed: u64,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
            hex_radius: 1.0,
            window_radius: 5,
            wrap_east_west: true,
            wrap_north_south: false,
            drag_threshold: 1.0,
            tile_palette_len: 4,
            tile_seed: 42,
        }
    }
}

/// Windowed hex map plugin: startup generation plus drag-driven
/// recentering.
pub struct MapViewPlugin(pub MapViewConfig);

impl Plugin for MapViewPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MapViewConfig>()
            .insert_resource(self.0.clone())
            .add_message::<MapDrag>()
            .add_message::<ViewTranslated>()
            .add_message::<ViewportChanged>()
            .add_systems(Startup, systems::setup_map)
            .add_systems(Update, systems::handle_drag);
    }
}

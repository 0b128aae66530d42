#![warn(missing_docs)]
//! Headless windowed-map demo.
//!
//! Generates a map from CLI flags, replays one scripted drag gesture
//! through the map-view plugin, logs what a renderer would see, and exits.

use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use hex_map::map_view::{MapDrag, MapViewConfig, MapViewPlugin, ViewportChanged};

/// Command-line flags mirroring [`MapViewConfig`].
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of map columns.
    #[arg(long, default_value_t = 20)]
    columns: i32,
    /// Number of map rows.
    #[arg(long, default_value_t = 20)]
    rows: i32,
    /// Cells shown around the window center.
    #[arg(long, default_value_t = 5)]
    window_radius: i32,
    /// Hex radius in world units.
    #[arg(long, default_value_t = 1.0)]
    hex_radius: f32,
    /// Disable east-west position wrapping.
    #[arg(long)]
    no_wrap_east_west: bool,
    /// Enable north-south position wrapping.
    #[arg(long)]
    wrap_north_south: bool,
    /// Minimum drag distance, in world units, that counts as a pan.
    #[arg(long, default_value_t = 1.0)]
    drag_threshold: f32,
    /// Seed for the random tile assignment.
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

fn main() {
    let cli = Cli::parse();
    let config = MapViewConfig {
        columns: cli.columns,
        rows: cli.rows,
        hex_radius: cli.hex_radius,
        window_radius: cli.window_radius,
        wrap_east_west: !cli.no_wrap_east_west,
        wrap_north_south: cli.wrap_north_south,
        drag_threshold: cli.drag_threshold,
        tile_seed: cli.seed,
        ..MapViewConfig::default()
    };

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        .add_plugins(MapViewPlugin(config))
        .add_systems(Update, (drive_demo_drag, report_changes))
        .run();
}

/// Replays begin → continue → end over three frames, then quits.
fn drive_demo_drag(
    mut frame: Local<u32>,
    mut drags: MessageWriter<MapDrag>,
    mut exit: MessageWriter<AppExit>,
) {
    *frame += 1;
    match *frame {
        1 => {
            drags.write(MapDrag::Begin {
                world_point: Vec3::ZERO,
                touched_cell: None,
            });
        }
        2 => {
            drags.write(MapDrag::Continue {
                world_point: Vec3::new(-2.6, 0.0, 0.0),
            });
        }
        3 => {
            drags.write(MapDrag::End {
                world_point: Vec3::new(-5.2, 0.0, 0.0),
            });
        }
        _ => {
            exit.write(AppExit::Success);
        }
    }
}

/// Logs each window change the way a renderer would consume it.
fn report_changes(mut changes: MessageReader<ViewportChanged>) {
    for change in changes.read() {
        info!(
            "window centered on {}: {} cells entered, {} exited",
            change.center,
            change.entered.len(),
            change.exited.len()
        );
    }
}

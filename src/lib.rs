#![warn(missing_docs)]
//! Windowed hexagonal map core for 3D viewports.
//!
//! A large axial hex grid is generated once; only a window of cells around a
//! focus cell is considered visible, and drag gestures slide that window
//! across the map. The geometry and windowing core is pure and engine-free;
//! [`map_view`] exposes it to a Bevy application as resources and buffered
//! messages, leaving all rendering to the consumer.

pub mod hex;
pub mod layout;
pub mod map;
pub mod map_view;
pub mod pan;
pub mod viewport;
pub mod wrap;

pub use hex::HexCoord;
pub use layout::HexLayout;
pub use map::{HexCell, HexMap, MapError, RandomTileChooser, TileChooser, TileId};
pub use pan::PanController;
pub use viewport::{Viewport, ViewportDiff, visible_cells};
pub use wrap::WrapProjector;

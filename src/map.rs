//! Dense hex cell storage and one-shot map generation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::hex::HexCoord;

/// Errors surfaced by map generation, lookup, and windowing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    /// Map generation was asked for a non-positive extent.
    #[error("invalid map dimensions {columns}x{rows}: both must be positive")]
    InvalidDimension {
        /// Requested column count.
        columns: i32,
        /// Requested row count.
        rows: i32,
    },
    /// A cell lookup fell outside the map extents.
    #[error("cell ({column}, {row}) is outside the map")]
    OutOfBounds {
        /// Requested column.
        column: i32,
        /// Requested row.
        row: i32,
    },
    /// A viewport was given a negative window radius.
    #[error("invalid window radius {0}: must be non-negative")]
    InvalidRadius(i32),
}

/// Identifier of a cell's material/tag in a renderer-owned palette.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TileId(pub usize);

/// A single map cell: its grid coordinate plus the tile payload assigned at
/// generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexCell {
    /// Grid coordinate; `q` is the storage column, `r` the row.
    pub coord: HexCoord,
    /// Payload for the renderer to resolve against its palette.
    pub tile: TileId,
}

/// Policy deciding each generated cell's tile payload.
///
/// Kept abstract so callers can plug in anything from a constant to a
/// noise-driven distribution; closures implement it directly.
pub trait TileChooser {
    /// Tile for the cell at `coord`.
    fn choose(&mut self, coord: HexCoord) -> TileId;
}

impl<F: FnMut(HexCoord) -> TileId> TileChooser for F {
    fn choose(&mut self, coord: HexCoord) -> TileId {
        self(coord)
    }
}

/// Uniform random pick over a palette of `palette_len` tiles.
///
/// Seeded, so the same configuration always generates the same map.
#[derive(Debug)]
pub struct RandomTileChooser {
    rng: SmallRng,
    palette_len: usize,
}

impl RandomTileChooser {
    /// Chooser over tiles `0..palette_len`. The palette must not be empty.
    pub fn new(palette_len: usize, seed: u64) -> Self {
        assert!(palette_len > 0, "tile palette must not be empty");
        Self {
            rng: SmallRng::seed_from_u64(seed),
            palette_len,
        }
    }
}

impl TileChooser for RandomTileChooser {
    fn choose(&mut self, _coord: HexCoord) -> TileId {
        TileId(self.rng.gen_range(0..self.palette_len))
    }
}

/// Dense rectangular table of hex cells, generated once and read-only
/// afterwards.
///
/// Storage is column-major: every row of column 0, then column 1, and so on,
/// mirroring the `(column, row)` indexing of [`HexMap::get`]. The cell at
/// `(column, row)` always carries the coordinate `q = column, r = row`.
#[derive(Debug)]
pub struct HexMap {
    columns: i32,
    rows: i32,
    cells: Vec<HexCell>,
}

impl HexMap {
    /// Allocates and fills a `columns x rows` map, asking `chooser` for each
    /// cell's tile in storage order.
    pub fn generate(
        columns: i32,
        rows: i32,
        chooser: &mut impl TileChooser,
    ) -> Result<Self, MapError> {
        if columns <= 0 || rows <= 0 {
            return Err(MapError::InvalidDimension { columns, rows });
        }

        let mut cells = Vec::with_capacity((columns * rows) as usize);
        for column in 0..columns {
            for row in 0..rows {
                let coord = HexCoord::new(column, row);
                cells.push(HexCell {
                    coord,
                    tile: chooser.choose(coord),
                });
            }
        }
        Ok(Self {
            columns,
            rows,
            cells,
        })
    }

    /// Number of columns.
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Bounds-checked cell lookup.
    pub fn get(&self, column: i32, row: i32) -> Result<&HexCell, MapError> {
        if !(0..self.columns).contains(&column) || !(0..self.rows).contains(&row) {
            return Err(MapError::OutOfBounds { column, row });
        }
        Ok(&self.cells[(column * self.rows + row) as usize])
    }

    /// All cells in storage order, for full-map draws.
    pub fn iter(&self) -> impl Iterator<Item = &HexCell> {
        self.cells.iter()
    }
}

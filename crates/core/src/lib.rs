//! Core rules engine - grid, pieces, collision and row compaction
//!
//! This crate holds the parts of a falling-block game that carry real
//! invariants: grid bounds, occupancy, rotation geometry and row-shift
//! order. It has no dependencies on rendering, input, or timing.
//!
//! - **Deterministic**: every operation is synchronous and pure given its inputs
//! - **Single-owner**: `Grid` and `Piece` carry no locks; a host running several
//!   sessions gives each its own pair
//!
//! # Module Structure
//!
//! - [`coordinate`]: 2D points with translation and 90° clockwise rotation
//! - [`cells`]: the cell-mapping interface and the default outline rasterizer
//! - [`shapes`]: spawn outlines for the seven tetrominoes
//! - [`piece`]: the falling piece with derived squares
//! - [`grid`]: collision testing, placement and full-row clearing
//! - [`rng`]: seedable RNG and bag-based piece queue
//! - [`snapshot`]: serializable views for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Grid, Piece};
//! use blockfall_core::types::ShapeId;
//!
//! let mut grid = Grid::new(4, 20).unwrap();
//! let mut piece = Piece::spawn(ShapeId::I, 0, 0).unwrap();
//!
//! // Fall until the next step would collide
//! loop {
//!     piece.move_by(0, 1).unwrap();
//!     if grid.check_collision(&piece) {
//!         piece.move_by(0, -1).unwrap();
//!         break;
//!     }
//! }
//!
//! grid.place(&piece).unwrap();
//! assert_eq!(grid.clear_rows(), vec![19]);
//! assert_eq!(grid.occupied_count(), 0);
//! ```

pub mod cells;
pub mod coordinate;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use cells::{CellMap, OutlineCells, ShapeError, Squares};
pub use coordinate::{Coordinate, Square};
pub use grid::{Block, Cell, Grid, GridError, PlaceError};
pub use piece::Piece;
pub use rng::{PieceQueue, SimpleRng};
pub use snapshot::{GridSnapshot, PieceSnapshot};

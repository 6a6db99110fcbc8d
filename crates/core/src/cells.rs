//! Cell mapping - converts a piece's outline into the grid cells it occupies
//!
//! A piece stores the vertices of its outline, not its cells. After every
//! change to the vertices or the orientation the piece asks a [`CellMap`] for
//! its squares. Hosts with their own shape tables can supply a custom mapper;
//! [`OutlineCells`] is the default and works for any rectilinear outline.

use std::fmt;

use arrayvec::ArrayVec;

use crate::coordinate::{Coordinate, Square};
use crate::types::{ShapeId, CELLS_PER_PIECE, ORIENTATIONS};

/// The cells occupied by one piece
pub type Squares = ArrayVec<Square, CELLS_PER_PIECE>;

/// Largest bounding box (in cells) the default mapper is willing to scan
const MAX_SCAN_CELLS: f64 = 64.0;

/// Rejection from a cell-mapping function
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// A shape name did not resolve to one of the seven tetrominoes
    UnknownShape(String),
    /// Orientation index outside 0..=3
    InvalidOrientation(u8),
    /// The outline does not describe exactly four cells
    Malformed { shape: ShapeId, cells: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::UnknownShape(name) => write!(f, "unknown shape {name:?}"),
            ShapeError::InvalidOrientation(o) => {
                write!(f, "orientation {o} is outside 0..{ORIENTATIONS}")
            }
            ShapeError::Malformed { shape, cells } => write!(
                f,
                "outline for shape {shape} spans {cells} cells, expected {CELLS_PER_PIECE}"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Maps `(shape, vertices, orientation)` to occupied cells
///
/// Implementations must be pure: a piece recomputes its squares after every
/// mutation and relies on identical inputs producing identical output.
pub trait CellMap {
    fn map_cells(
        &self,
        shape: ShapeId,
        vertices: &[Coordinate],
        orientation: u8,
    ) -> Result<Squares, ShapeError>;
}

/// Default mapper: rasterizes the vertex outline
///
/// The vertices are read as a closed polygon. A cell `(x, y)` is occupied when
/// its centre `(x + 0.5, y + 0.5)` lies inside the polygon (even-odd rule).
/// Cells are returned in row-major order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlineCells;

impl CellMap for OutlineCells {
    fn map_cells(
        &self,
        shape: ShapeId,
        vertices: &[Coordinate],
        orientation: u8,
    ) -> Result<Squares, ShapeError> {
        if orientation >= ORIENTATIONS {
            return Err(ShapeError::InvalidOrientation(orientation));
        }
        if vertices.len() < 3 || vertices.iter().any(|v| !v.x.is_finite() || !v.y.is_finite()) {
            return Err(ShapeError::Malformed { shape, cells: 0 });
        }

        let (mut min_x, mut min_y) = (f64::INFINITY, f64::INFINITY);
        let (mut max_x, mut max_y) = (f64::NEG_INFINITY, f64::NEG_INFINITY);
        for v in vertices {
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        // Bounds are checked in f64 so huge outlines cannot overflow the casts.
        let (x0, x1) = (min_x.floor(), max_x.ceil());
        let (y0, y1) = (min_y.floor(), max_y.ceil());
        let span = (x1 - x0) * (y1 - y0);
        if span > MAX_SCAN_CELLS {
            return Err(ShapeError::Malformed {
                shape,
                cells: span as usize,
            });
        }
        let cell_range = i32::MIN as f64..=i32::MAX as f64;
        if ![x0, x1, y0, y1].iter().all(|v| cell_range.contains(v)) {
            return Err(ShapeError::Malformed { shape, cells: 0 });
        }
        let (x0, x1, y0, y1) = (x0 as i64, x1 as i64, y0 as i64, y1 as i64);

        let mut squares = Squares::new();
        let mut covered = 0usize;
        for y in y0..y1 {
            for x in x0..x1 {
                if contains(vertices, x as f64 + 0.5, y as f64 + 0.5) {
                    covered += 1;
                    // Overflow is reported below via `covered`.
                    let _ = squares.try_push(Square::new(x as i32, y as i32));
                }
            }
        }

        if covered != CELLS_PER_PIECE {
            return Err(ShapeError::Malformed {
                shape,
                cells: covered,
            });
        }
        Ok(squares)
    }
}

/// Even-odd point-in-polygon test
fn contains(polygon: &[Coordinate], px: f64, py: f64) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > py) != (b.y > py) {
            let cross_x = (b.x - a.x) * (py - a.y) / (b.y - a.y) + a.x;
            if px < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

//! Piece module - the falling tetromino
//!
//! A piece is described by its outline vertices and an orientation index. The
//! occupied squares are derived from those two by the piece's [`CellMap`] and
//! are never set directly: every mutation recomputes them before returning,
//! so callers cannot observe stale squares.
//!
//! Movement and rotation are purely geometric. Whether the result is legal is
//! decided by [`Grid::check_collision`](crate::Grid::check_collision); callers
//! roll back an illegal move by applying the inverse move or by restoring a
//! clone taken beforehand.

use std::fmt;

use crate::cells::{CellMap, OutlineCells, ShapeError, Squares};
use crate::coordinate::{Coordinate, Square};
use crate::shapes;
use crate::types::{Color, ShapeId, ORIENTATIONS};

/// A movable tetromino
///
/// Cloning a piece preserves its orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece<M = OutlineCells> {
    shape: ShapeId,
    vertices: Vec<Coordinate>,
    color: Color,
    orientation: u8,
    squares: Squares,
    mapper: M,
}

impl Piece {
    /// Build a piece from an outline, translated by (dx, dy)
    ///
    /// Fails if the default mapper rejects the shape/orientation combination.
    pub fn new(
        shape: ShapeId,
        vertices: &[Coordinate],
        color: Color,
        orientation: u8,
        dx: i32,
        dy: i32,
    ) -> Result<Self, ShapeError> {
        Self::with_mapper(OutlineCells, shape, vertices, color, orientation, dx, dy)
    }

    /// Build a piece in spawn orientation from the built-in outline and palette
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::{Piece, Square};
    /// use blockfall_core::types::ShapeId;
    ///
    /// let piece = Piece::spawn(ShapeId::O, 4, 0).unwrap();
    /// assert_eq!(piece.orientation(), 0);
    /// assert!(piece.squares().contains(&Square::new(5, 1)));
    /// ```
    pub fn spawn(shape: ShapeId, dx: i32, dy: i32) -> Result<Self, ShapeError> {
        Self::new(shape, &shapes::outline(shape), shape.color(), 0, dx, dy)
    }
}

impl<M: CellMap> Piece<M> {
    /// Build a piece that derives its squares through `mapper`
    pub fn with_mapper(
        mapper: M,
        shape: ShapeId,
        vertices: &[Coordinate],
        color: Color,
        orientation: u8,
        dx: i32,
        dy: i32,
    ) -> Result<Self, ShapeError> {
        let vertices: Vec<Coordinate> = vertices
            .iter()
            .map(|v| v.translate(dx as f64, dy as f64))
            .collect();
        let squares = mapper.map_cells(shape, &vertices, orientation)?;
        Ok(Self {
            shape,
            vertices,
            color,
            orientation,
            squares,
            mapper,
        })
    }

    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    /// Grid cells currently occupied
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Translate every vertex by (dx, dy) and recompute the squares
    pub fn move_by(&mut self, dx: i32, dy: i32) -> Result<(), ShapeError> {
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.translate(dx as f64, dy as f64))
            .collect();
        self.update(vertices, self.orientation)
    }

    /// Centroid of the vertices
    ///
    /// A piece without vertices has no meaningful pivot; the origin is returned
    /// and a warning is logged.
    pub fn pivot(&self) -> Coordinate {
        if self.vertices.is_empty() {
            log::warn!("pivot requested for {} piece with no vertices", self.shape);
            return Coordinate::origin();
        }
        let n = self.vertices.len() as f64;
        let sum = self
            .vertices
            .iter()
            .fold(Coordinate::origin(), |acc, &v| acc + v);
        Coordinate::new(sum.x / n, sum.y / n)
    }

    /// Rotate 90° clockwise about the pivot
    ///
    /// Rotated vertices are floored to integers (toward negative infinity, not
    /// rounded), the orientation advances modulo 4, and the squares are
    /// recomputed.
    pub fn rotate(&mut self) -> Result<(), ShapeError> {
        let pivot = self.pivot();
        let vertices = self
            .vertices
            .iter()
            .map(|v| v.rotate(pivot).floor())
            .collect();
        self.update(vertices, (self.orientation + 1) % ORIENTATIONS)
    }

    /// Replace vertices and orientation together with their derived squares.
    /// On rejection the piece is left untouched.
    fn update(&mut self, vertices: Vec<Coordinate>, orientation: u8) -> Result<(), ShapeError> {
        let squares = self.mapper.map_cells(self.shape, &vertices, orientation)?;
        self.vertices = vertices;
        self.orientation = orientation;
        self.squares = squares;
        Ok(())
    }
}

impl<M> fmt::Display for Piece<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} piece verts [", self.shape)?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(
            f,
            "] color: ({}, {}, {}) orientation: {}",
            self.color.r, self.color.g, self.color.b, self.orientation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_applies_offset() {
        let piece = Piece::new(
            ShapeId::O,
            &shapes::outline(ShapeId::O),
            Color::new(1, 2, 3),
            0,
            3,
            5,
        )
        .unwrap();
        assert_eq!(piece.vertices()[0], Coordinate::new(3.0, 5.0));
        assert_eq!(
            piece.squares(),
            &[
                Square::new(3, 5),
                Square::new(4, 5),
                Square::new(3, 6),
                Square::new(4, 6)
            ]
        );
    }

    #[test]
    fn test_pivot_is_vertex_mean() {
        let piece = Piece::spawn(ShapeId::I, 0, 0).unwrap();
        assert_eq!(piece.pivot(), Coordinate::new(2.0, 0.5));
    }

    #[test]
    fn test_failed_update_leaves_piece_unchanged() {
        #[derive(Clone)]
        struct RejectBelow(f64);

        impl CellMap for RejectBelow {
            fn map_cells(
                &self,
                shape: ShapeId,
                vertices: &[Coordinate],
                orientation: u8,
            ) -> Result<Squares, ShapeError> {
                if vertices.iter().any(|v| v.y > self.0) {
                    return Err(ShapeError::Malformed { shape, cells: 0 });
                }
                OutlineCells.map_cells(shape, vertices, orientation)
            }
        }

        let mut piece = Piece::with_mapper(
            RejectBelow(3.0),
            ShapeId::O,
            &shapes::outline(ShapeId::O),
            ShapeId::O.color(),
            0,
            0,
            0,
        )
        .unwrap();
        piece.move_by(0, 1).unwrap();
        let before = piece.squares().to_vec();

        assert!(piece.move_by(0, 1).is_err());
        assert_eq!(piece.squares(), before.as_slice());
        assert_eq!(piece.vertices()[0], Coordinate::new(0.0, 1.0));
    }

    #[test]
    fn test_empty_outline_pivots_on_origin() {
        struct AcceptAll;

        impl CellMap for AcceptAll {
            fn map_cells(
                &self,
                _shape: ShapeId,
                _vertices: &[Coordinate],
                _orientation: u8,
            ) -> Result<Squares, ShapeError> {
                Ok(Squares::new())
            }
        }

        let mut piece =
            Piece::with_mapper(AcceptAll, ShapeId::I, &[], ShapeId::I.color(), 0, 0, 0).unwrap();
        assert_eq!(piece.pivot(), Coordinate::origin());

        piece.rotate().unwrap();
        assert_eq!(piece.orientation(), 1);
        assert!(piece.vertices().is_empty());
        assert!(piece.squares().is_empty());
    }

    #[test]
    fn test_display() {
        let piece = Piece::spawn(ShapeId::O, 0, 0).unwrap();
        let text = piece.to_string();
        assert!(text.starts_with("o piece verts [x: 0 y: 0"));
        assert!(text.ends_with("orientation: 0"));
    }
}

//! Shapes module - spawn outlines for the seven tetrominoes
//!
//! Each outline is a closed rectilinear polygon anchored at the origin in
//! spawn orientation (y grows downward). Pieces are spawned by translating
//! the outline to the spawn column.

use crate::cells::ShapeError;
use crate::coordinate::Coordinate;
use crate::types::ShapeId;

/// A polygon vertex in integer grid units
pub type OutlinePoint = (i32, i32);

const I_OUTLINE: &[OutlinePoint] = &[(0, 0), (4, 0), (4, 1), (0, 1)];

const O_OUTLINE: &[OutlinePoint] = &[(0, 0), (2, 0), (2, 2), (0, 2)];

const T_OUTLINE: &[OutlinePoint] = &[
    (0, 0),
    (3, 0),
    (3, 1),
    (2, 1),
    (2, 2),
    (1, 2),
    (1, 1),
    (0, 1),
];

const S_OUTLINE: &[OutlinePoint] = &[
    (1, 0),
    (3, 0),
    (3, 1),
    (2, 1),
    (2, 2),
    (0, 2),
    (0, 1),
    (1, 1),
];

const Z_OUTLINE: &[OutlinePoint] = &[
    (0, 0),
    (2, 0),
    (2, 1),
    (3, 1),
    (3, 2),
    (1, 2),
    (1, 1),
    (0, 1),
];

const J_OUTLINE: &[OutlinePoint] = &[(0, 0), (1, 0), (1, 1), (3, 1), (3, 2), (0, 2)];

const L_OUTLINE: &[OutlinePoint] = &[(2, 0), (3, 0), (3, 2), (0, 2), (0, 1), (2, 1)];

/// Raw outline points for a shape in spawn orientation
pub fn outline_points(shape: ShapeId) -> &'static [OutlinePoint] {
    match shape {
        ShapeId::I => I_OUTLINE,
        ShapeId::O => O_OUTLINE,
        ShapeId::T => T_OUTLINE,
        ShapeId::S => S_OUTLINE,
        ShapeId::Z => Z_OUTLINE,
        ShapeId::J => J_OUTLINE,
        ShapeId::L => L_OUTLINE,
    }
}

/// Spawn outline as coordinates, ready to hand to [`crate::Piece::new`]
pub fn outline(shape: ShapeId) -> Vec<Coordinate> {
    outline_points(shape)
        .iter()
        .map(|&p| Coordinate::from(p))
        .collect()
}

/// Horizontal extent of the spawn outline in cells
pub fn outline_width(shape: ShapeId) -> i32 {
    let points = outline_points(shape);
    let min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let max = points.iter().map(|p| p.0).max().unwrap_or(0);
    max - min
}

/// Resolve a shape name, reporting unknown names as a shape error
pub fn parse_shape(name: &str) -> Result<ShapeId, ShapeError> {
    ShapeId::from_str(name).ok_or_else(|| ShapeError::UnknownShape(name.to_string()))
}

//! Read-only views of the grid and the active piece for renderers.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::piece::Piece;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    /// Rows top to bottom; each occupied cell carries its RGB color
    pub cells: Vec<Vec<Option<[u8; 3]>>>,
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.map(|block| block.color.to_array()))
                        .collect()
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub shape: String,
    pub color: [u8; 3],
    pub orientation: u8,
    pub vertices: Vec<(f64, f64)>,
    pub squares: Vec<(i32, i32)>,
}

impl<M> From<&Piece<M>> for PieceSnapshot
where
    M: crate::cells::CellMap,
{
    fn from(piece: &Piece<M>) -> Self {
        Self {
            shape: piece.shape().as_str().to_string(),
            color: piece.color().to_array(),
            orientation: piece.orientation(),
            vertices: piece.vertices().iter().map(|v| (v.x, v.y)).collect(),
            squares: piece.squares().iter().map(|s| (s.x, s.y)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeId;

    #[test]
    fn test_grid_snapshot_json() {
        let mut grid = Grid::new(2, 2).unwrap();
        let piece = Piece::new(
            ShapeId::O,
            &crate::shapes::outline(ShapeId::O),
            [1, 2, 3].into(),
            0,
            0,
            0,
        )
        .unwrap();
        grid.place(&piece).unwrap();

        let json = serde_json::to_value(GridSnapshot::from(&grid)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "width": 2,
                "height": 2,
                "cells": [[[1, 2, 3], [1, 2, 3]], [[1, 2, 3], [1, 2, 3]]]
            })
        );
    }

    #[test]
    fn test_piece_snapshot() {
        let piece = Piece::spawn(ShapeId::I, 3, 0).unwrap();
        let snap = PieceSnapshot::from(&piece);
        assert_eq!(snap.shape, "i");
        assert_eq!(snap.orientation, 0);
        assert_eq!(snap.vertices[0], (3.0, 0.0));
        assert_eq!(snap.squares, vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    }
}

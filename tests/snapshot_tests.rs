//! Snapshot tests - renderer views serialize to stable JSON

use serde::Deserialize;

use blockfall::core::{Grid, GridSnapshot, Piece, PieceSnapshot};
use blockfall::engine::{Session, SessionConfig};
use blockfall::types::ShapeId;

/// What a renderer would decode on its side of the boundary
#[derive(Debug, Deserialize)]
struct RenderedPiece {
    color: [u8; 3],
    vertices: Vec<(f64, f64)>,
}

#[test]
fn test_grid_snapshot_roundtrip() {
    let mut grid = Grid::new(4, 3).unwrap();
    grid.place(&Piece::spawn(ShapeId::T, 0, 1).unwrap()).unwrap();

    let snapshot = GridSnapshot::from(&grid);
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GridSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snapshot);

    let t = Some(ShapeId::T.color().to_array());
    assert_eq!(back.cells[0], vec![None; 4]);
    assert_eq!(back.cells[1], vec![t, t, t, None]);
    assert_eq!(back.cells[2], vec![None, t, None, None]);
}

#[test]
fn test_piece_snapshot_exposes_vertices_for_drawing() {
    let piece = Piece::spawn(ShapeId::O, 2, 3).unwrap();
    let json = serde_json::to_string(&PieceSnapshot::from(&piece)).unwrap();
    let rendered: RenderedPiece = serde_json::from_str(&json).unwrap();
    assert_eq!(rendered.color, ShapeId::O.color().to_array());
    assert_eq!(
        rendered.vertices,
        vec![(2.0, 3.0), (4.0, 3.0), (4.0, 5.0), (2.0, 5.0)]
    );
}

#[test]
fn test_session_snapshot() {
    let session = Session::new(SessionConfig::default()).unwrap();
    let (grid, active) = session.snapshot();
    assert_eq!((grid.width, grid.height), (10, 20));
    let active = active.unwrap();
    assert_eq!(active.squares.len(), 4);
    assert_eq!(active.orientation, 0);
}

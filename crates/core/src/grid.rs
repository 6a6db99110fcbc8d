//! Grid module - the settled cells of the playfield
//!
//! The grid is `width` columns by `height` rows, fixed at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Cells are stored in a flat row-major vector.
//!
//! A cell is occupied only if a piece was placed over it and the row has not
//! been cleared since. Cells above the top row (`y < 0`) are never reported as
//! colliding so pieces can spawn and rotate partly above the visible board.

use std::fmt;

use crate::cells::CellMap;
use crate::coordinate::Square;
use crate::piece::Piece;
use crate::types::{Color, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// A settled cell. `y` always equals the row the block is stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

/// A grid cell: `None` when empty
pub type Cell = Option<Block>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    EmptyDimensions { width: u16, height: u16 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::EmptyDimensions { width, height } => {
                write!(f, "grid dimensions must be non-zero, got {width}x{height}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Why a piece could not be placed. Nothing is written when placement fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// Square lies left, right, or below the grid
    OutOfBounds(Square),
    /// Square lies above the top row
    AboveTop(Square),
    /// Square is already occupied
    Occupied(Square),
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::OutOfBounds(s) => write!(f, "square {s} is outside the grid"),
            PlaceError::AboveTop(s) => write!(f, "square {s} is above the top row"),
            PlaceError::Occupied(s) => write!(f, "square {s} is already occupied"),
        }
    }
}

impl std::error::Error for PlaceError {}

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyDimensions { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y). Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Check if a row has no empty cells
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height {
            return false;
        }
        let start = y * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// True if any square of `piece` is left of, right of, or below the grid,
    /// or lands on an occupied cell. Squares above the top row pass.
    pub fn check_collision<M: CellMap>(&self, piece: &Piece<M>) -> bool {
        self.check_squares(piece.squares())
    }

    /// [`check_collision`](Self::check_collision) over raw squares
    pub fn check_squares(&self, squares: &[Square]) -> bool {
        squares.iter().any(|&s| self.collides(s))
    }

    fn collides(&self, s: Square) -> bool {
        if s.x < 0 || s.x as usize >= self.width {
            return true;
        }
        if s.y >= 0 && s.y as usize >= self.height {
            return true;
        }
        // Above the top row: never flagged.
        s.y >= 0 && self.is_occupied(s.x, s.y)
    }

    /// Stamp the piece's squares into the grid with the piece's color
    ///
    /// Every square is validated first; on error the grid is unchanged.
    /// Unlike [`check_collision`](Self::check_collision), squares above the
    /// top row are rejected since they have no cell to occupy.
    pub fn place<M: CellMap>(&mut self, piece: &Piece<M>) -> Result<(), PlaceError> {
        for &s in piece.squares() {
            if s.y < 0 {
                return Err(PlaceError::AboveTop(s));
            }
            match self.get(s.x, s.y) {
                None => return Err(PlaceError::OutOfBounds(s)),
                Some(Some(_)) => return Err(PlaceError::Occupied(s)),
                Some(None) => {}
            }
        }

        let color = piece.color();
        for &s in piece.squares() {
            if let Some(idx) = self.index(s.x, s.y) {
                self.cells[idx] = Some(Block {
                    x: s.x,
                    y: s.y,
                    color,
                });
            }
        }
        Ok(())
    }

    /// Remove every full row, backfilling with empty rows at the top
    ///
    /// Full rows are collected first, then the surviving rows are copied in
    /// order below one empty row per removed row. Each surviving block's `y`
    /// is rewritten to its new row. Returns the removed row indices, top to
    /// bottom, as they were before compaction.
    pub fn clear_rows(&mut self) -> Vec<usize> {
        let cleared: Vec<usize> = (0..self.height).filter(|&y| self.is_row_full(y)).collect();
        if cleared.is_empty() {
            return cleared;
        }

        let width = self.width;
        let mut cells = vec![None; self.cells.len()];
        let mut write_y = cleared.len();
        for read_y in (0..self.height).filter(|y| !cleared.contains(y)) {
            let src = &self.cells[read_y * width..(read_y + 1) * width];
            let dst = &mut cells[write_y * width..(write_y + 1) * width];
            for (to, from) in dst.iter_mut().zip(src) {
                *to = from.map(|block| Block {
                    y: write_y as i32,
                    ..block
                });
            }
            write_y += 1;
        }
        self.cells = cells;

        log::debug!("cleared rows {:?}", cleared);
        cleared
    }

    /// Set a cell directly, bypassing placement checks
    #[cfg(test)]
    pub(crate) fn set(&mut self, x: i32, y: i32, color: Option<Color>) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = color.map(|color| Block { x, y, color });
                true
            }
            None => false,
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH as usize,
            height: DEFAULT_GRID_HEIGHT as usize,
            cells: vec![None; DEFAULT_GRID_WIDTH as usize * DEFAULT_GRID_HEIGHT as usize],
        }
    }
}

/// Text dump: one line per row, `#` for occupied and `.` for empty
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                f.write_str(if cell.is_some() { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Option<Color> = Some(Color::new(255, 0, 0));

    fn fill_row(grid: &mut Grid, y: i32) {
        for x in 0..grid.width() as i32 {
            grid.set(x, y, RED);
        }
    }

    #[test]
    fn test_index_calculation() {
        let grid = Grid::default();
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 20),
            Err(GridError::EmptyDimensions {
                width: 0,
                height: 20
            })
        );
        assert!(Grid::new(4, 0).is_err());
    }

    #[test]
    fn test_collision_above_top_only_checks_columns() {
        let grid = Grid::new(4, 4).unwrap();
        assert!(!grid.check_squares(&[Square::new(0, -3)]));
        assert!(grid.check_squares(&[Square::new(-1, -3)]));
        assert!(grid.check_squares(&[Square::new(4, -1)]));
    }

    #[test]
    fn test_clear_multiple_rows_keeps_order() {
        let mut grid = Grid::new(3, 6).unwrap();
        grid.set(0, 0, RED);
        fill_row(&mut grid, 1);
        grid.set(1, 2, RED);
        fill_row(&mut grid, 3);
        fill_row(&mut grid, 4);
        grid.set(2, 5, RED);

        let cleared = grid.clear_rows();
        assert_eq!(cleared, vec![1, 3, 4]);
        assert_eq!(grid.to_string(), "...\n...\n...\n#..\n.#.\n..#");

        for (y, row) in grid.rows().enumerate() {
            for block in row.iter().flatten() {
                assert_eq!(block.y, y as i32);
            }
        }
    }

    #[test]
    fn test_clear_no_full_rows_is_noop() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(0, 2, RED);
        grid.set(1, 2, RED);
        let before = grid.clone();
        assert!(grid.clear_rows().is_empty());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, RED);
        assert_eq!(grid.to_string(), "..\n.#");
    }
}

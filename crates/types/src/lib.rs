//! Shared types module - identifiers, colors and grid defaults
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the rules engine, the reference driver, and any renderer a host
//! application plugs in.
//!
//! # Grid Dimensions
//!
//! The engine accepts any non-zero width and height. The defaults match the
//! standard playfield:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Color, ShapeId, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
//!
//! let shape = ShapeId::from_str("t").unwrap();
//! assert_eq!(shape, ShapeId::T);
//! assert_eq!(shape.as_str(), "t");
//! assert_eq!(shape.color(), Color::new(160, 0, 240));
//!
//! assert_eq!(DEFAULT_GRID_WIDTH, 10);
//! assert_eq!(DEFAULT_GRID_HEIGHT, 20);
//! ```

use std::fmt;

/// Default grid width in cells (10 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 20;

/// Number of discrete orientations a piece cycles through
pub const ORIENTATIONS: u8 = 4;

/// Number of cells every tetromino occupies
pub const CELLS_PER_PIECE: usize = 4;

/// The seven tetromino shapes
///
/// The identifier selects the spawn outline and is what the cell-mapping
/// function receives alongside a piece's vertices and orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeId {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl ShapeId {
    /// All shapes in canonical order
    pub const ALL: [ShapeId; 7] = [
        ShapeId::I,
        ShapeId::O,
        ShapeId::T,
        ShapeId::S,
        ShapeId::Z,
        ShapeId::J,
        ShapeId::L,
    ];

    /// Parse a shape from its single-letter name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeId;
    ///
    /// assert_eq!(ShapeId::from_str("i"), Some(ShapeId::I));
    /// assert_eq!(ShapeId::from_str("L"), Some(ShapeId::L));
    /// assert_eq!(ShapeId::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" => Some(ShapeId::I),
            "o" => Some(ShapeId::O),
            "t" => Some(ShapeId::T),
            "s" => Some(ShapeId::S),
            "z" => Some(ShapeId::Z),
            "j" => Some(ShapeId::J),
            "l" => Some(ShapeId::L),
            _ => None,
        }
    }

    /// Lowercase single-letter name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeId::I => "i",
            ShapeId::O => "o",
            ShapeId::T => "t",
            ShapeId::S => "s",
            ShapeId::Z => "z",
            ShapeId::J => "j",
            ShapeId::L => "l",
        }
    }

    /// Default display color for this shape
    ///
    /// - **I**: cyan
    /// - **O**: yellow
    /// - **T**: purple
    /// - **S**: green
    /// - **Z**: red
    /// - **J**: blue
    /// - **L**: orange
    pub fn color(&self) -> Color {
        match self {
            ShapeId::I => Color::new(0, 240, 240),
            ShapeId::O => Color::new(240, 240, 0),
            ShapeId::T => Color::new(160, 0, 240),
            ShapeId::S => Color::new(0, 240, 0),
            ShapeId::Z => Color::new(240, 0, 0),
            ShapeId::J => Color::new(0, 0, 240),
            ShapeId::L => Color::new(240, 160, 0),
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque RGB display tag
///
/// The engine never interprets a color; it only stamps it into grid cells
/// when a piece is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

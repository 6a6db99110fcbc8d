//! Coordinate module - 2D geometry primitives
//!
//! Coordinates use screen orientation: x grows to the right, y grows downward.
//! Components are `f64` because rotating about a centroid yields fractional
//! values. Rotation floors them back onto the grid with [`Coordinate::floor`].

use std::fmt;
use std::ops::{Add, Sub};

/// An immutable 2D point. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

/// An integer grid cell occupied by a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: i32,
    pub y: i32,
}

impl Square {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Coordinate {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Return this coordinate offset by (dx, dy)
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotate 90° clockwise about `pivot`
    ///
    /// The pivot is moved to the origin, `(x, y) -> (y, -x)` is applied, and
    /// the result is moved back.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Coordinate;
    ///
    /// let p = Coordinate::new(1.0, 0.0).rotate(Coordinate::origin());
    /// assert_eq!(p, Coordinate::new(0.0, -1.0));
    /// ```
    pub fn rotate(self, pivot: Coordinate) -> Self {
        let local = self - pivot;
        Coordinate::new(local.y, -local.x) + pivot
    }

    /// Rotate 90° clockwise about the origin
    pub fn rotate_about_origin(self) -> Self {
        self.rotate(Coordinate::origin())
    }

    /// Floor both components toward negative infinity
    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    /// Integer cell containing this point for non-negative components;
    /// each component is truncated toward zero
    pub fn to_square(self) -> Square {
        Square::new(self.x.trunc() as i32, self.y.trunc() as i32)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, other: Coordinate) -> Coordinate {
        Coordinate::new(self.x - other.x, self.y - other.y)
    }
}

impl From<Square> for Coordinate {
    fn from(square: Square) -> Self {
        Coordinate::new(square.x as f64, square.y as f64)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Coordinate::new(x as f64, y as f64)
    }
}

fn round4(v: f64) -> f64 {
    let r = (v * 10_000.0).round() / 10_000.0;
    // Avoid printing "-0".
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", round4(self.x), round4(self.y))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

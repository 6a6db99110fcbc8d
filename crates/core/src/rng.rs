//! RNG module - deterministic randomness for spawning
//!
//! Spawning is the driver's job, not the grid's, but every driver needs the
//! same two things: a seedable generator and a fair piece sequence. The bag
//! holds one of each allowed shape, shuffled, and is refilled when empty.

use arrayvec::ArrayVec;

use crate::types::ShapeId;

type Bag = ArrayVec<ShapeId, 7>;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Seed 0 is coerced to 1
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Bag-based piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Shapes a fresh bag is filled with, in canonical order
    shapes: Bag,
    bag: Bag,
    bag_index: usize,
    rng: SimpleRng,
}

impl PieceQueue {
    /// Standard 7-bag over every shape
    pub fn new(seed: u32) -> Self {
        Self::with_shapes(seed, &ShapeId::ALL)
    }

    /// Bag restricted to `shapes`. Duplicates are dropped; an empty list
    /// falls back to all seven shapes.
    pub fn with_shapes(seed: u32, shapes: &[ShapeId]) -> Self {
        let mut allowed = Bag::new();
        for &shape in ShapeId::ALL.iter().filter(|s| shapes.contains(s)) {
            allowed.push(shape);
        }
        if allowed.is_empty() {
            allowed.extend(ShapeId::ALL);
        }

        let mut queue = Self {
            bag: allowed.clone(),
            shapes: allowed,
            bag_index: 0,
            rng: SimpleRng::new(seed),
        };
        queue.refill_bag();
        queue
    }

    fn refill_bag(&mut self) {
        self.bag = self.shapes.clone();
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Peek at the next shape without consuming it
    pub fn peek(&self) -> ShapeId {
        if let Some(&shape) = self.bag.get(self.bag_index) {
            return shape;
        }
        // Preview the next bag from a copy of the RNG so the following draw agrees.
        let mut preview_rng = self.rng.clone();
        let mut next_bag = self.shapes.clone();
        preview_rng.shuffle(&mut next_bag);
        next_bag[0]
    }

    /// Draw the next shape
    pub fn draw(&mut self) -> ShapeId {
        if self.bag_index >= self.bag.len() {
            self.refill_bag();
        }
        let shape = self.bag[self.bag_index];
        self.bag_index += 1;
        shape
    }

    pub fn shapes(&self) -> &[ShapeId] {
        &self.shapes
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

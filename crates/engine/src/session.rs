//! Session - one grid and its active piece under a single owner
//!
//! The session applies the commit-or-rollback protocol around the core: a move
//! or rotation is applied, tested against the grid, and undone on collision.
//! A blocked downward step lands the piece: it is placed, full rows are
//! cleared, and the next shape is spawned. A spawn that collides ends the game.
//!
//! Timing (when to step down) and input mapping stay with the host.

use std::fmt;

use blockfall_core::{
    shapes, Grid, GridError, GridSnapshot, Piece, PieceQueue, PieceSnapshot, PlaceError,
    ShapeError,
};
use blockfall_types::{ShapeId, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub width: u16,
    pub height: u16,
    pub seed: u32,
    /// Shapes the spawn bag draws from; empty means all seven
    pub shapes: Vec<ShapeId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            seed: 1,
            shapes: Vec::new(),
        }
    }
}

/// Result of one downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row
    Fell,
    /// The piece was placed; `rows_cleared` full rows were removed
    Landed { rows_cleared: usize },
    /// No active piece: the game has ended
    GameOver,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionError {
    Grid(GridError),
    Shape(ShapeError),
    Place(PlaceError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Grid(e) => write!(f, "grid: {e}"),
            SessionError::Shape(e) => write!(f, "shape: {e}"),
            SessionError::Place(e) => write!(f, "place: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Grid(e) => Some(e),
            SessionError::Shape(e) => Some(e),
            SessionError::Place(e) => Some(e),
        }
    }
}

impl From<GridError> for SessionError {
    fn from(e: GridError) -> Self {
        SessionError::Grid(e)
    }
}

impl From<ShapeError> for SessionError {
    fn from(e: ShapeError) -> Self {
        SessionError::Shape(e)
    }
}

impl From<PlaceError> for SessionError {
    fn from(e: PlaceError) -> Self {
        SessionError::Place(e)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: Option<Piece>,
    queue: PieceQueue,
    pieces_placed: u32,
    rows_cleared: u32,
    game_over: bool,
}

impl Session {
    /// Create a session and spawn its first piece
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        let grid = Grid::new(config.width, config.height)?;
        let queue = PieceQueue::with_shapes(config.seed, &config.shapes);
        Self::from_parts(grid, queue)
    }

    /// Create a session over an existing grid
    pub fn from_parts(grid: Grid, queue: PieceQueue) -> Result<Self, SessionError> {
        let mut session = Self {
            grid,
            active: None,
            queue,
            pieces_placed: 0,
            rows_cleared: 0,
            game_over: false,
        };
        session.spawn()?;
        Ok(session)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_shape(&self) -> ShapeId {
        self.queue.peek()
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Renderer views of the grid and the active piece
    pub fn snapshot(&self) -> (GridSnapshot, Option<PieceSnapshot>) {
        (
            GridSnapshot::from(&self.grid),
            self.active.as_ref().map(PieceSnapshot::from),
        )
    }

    /// Spawn the next shape centred on the top row.
    /// Returns false (and ends the game) if it collides immediately.
    fn spawn(&mut self) -> Result<bool, SessionError> {
        let shape = self.queue.draw();
        let x = (self.grid.width() as i32 - shapes::outline_width(shape)) / 2;
        let piece = Piece::spawn(shape, x, 0)?;

        if self.grid.check_collision(&piece) {
            log::warn!(
                "spawn of {} blocked after {} pieces",
                shape,
                self.pieces_placed
            );
            self.active = None;
            self.game_over = true;
            return Ok(false);
        }

        self.active = Some(piece);
        Ok(true)
    }

    /// Move the active piece, rolling back on collision
    pub fn try_move(&mut self, dx: i32, dy: i32) -> Result<bool, SessionError> {
        let Some(piece) = self.active.as_mut() else {
            return Ok(false);
        };
        piece.move_by(dx, dy)?;
        if self.grid.check_collision(piece) {
            piece.move_by(-dx, -dy)?;
            return Ok(false);
        }
        Ok(true)
    }

    /// Rotate the active piece clockwise, restoring it on collision
    pub fn try_rotate(&mut self) -> Result<bool, SessionError> {
        let Some(piece) = self.active.as_mut() else {
            return Ok(false);
        };
        let saved = piece.clone();
        piece.rotate()?;
        if self.grid.check_collision(piece) {
            *piece = saved;
            return Ok(false);
        }
        Ok(true)
    }

    /// Move down one row, landing the piece if it cannot fall
    pub fn step_down(&mut self) -> Result<StepOutcome, SessionError> {
        if self.game_over || self.active.is_none() {
            return Ok(StepOutcome::GameOver);
        }
        if self.try_move(0, 1)? {
            return Ok(StepOutcome::Fell);
        }
        self.land()
    }

    /// Drop straight down until the piece lands
    pub fn hard_drop(&mut self) -> Result<StepOutcome, SessionError> {
        loop {
            match self.step_down()? {
                StepOutcome::Fell => continue,
                outcome => return Ok(outcome),
            }
        }
    }

    fn land(&mut self) -> Result<StepOutcome, SessionError> {
        let Some(piece) = self.active.take() else {
            return Ok(StepOutcome::GameOver);
        };

        match self.grid.place(&piece) {
            Ok(()) => {}
            Err(PlaceError::AboveTop(square)) => {
                log::warn!("{} piece locked above the top row at {}", piece.shape(), square);
                self.game_over = true;
                return Ok(StepOutcome::GameOver);
            }
            Err(e) => {
                self.active = Some(piece);
                return Err(e.into());
            }
        }

        let rows_cleared = self.grid.clear_rows().len();
        self.pieces_placed += 1;
        self.rows_cleared += rows_cleared as u32;
        log::debug!(
            "landed {} piece #{}, cleared {} rows",
            piece.shape(),
            self.pieces_placed,
            rows_cleared
        );

        self.spawn()?;
        Ok(StepOutcome::Landed { rows_cleared })
    }
}

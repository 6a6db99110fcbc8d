use crate::session::{Session, SessionError, StepOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    NotPlayable,
    RotationBlocked,
    ColumnOutOfBounds,
    ColumnBlocked,
    Engine(SessionError),
}

impl PlanError {
    /// The target cannot be reached; the session was restored and is still playable
    pub fn is_invalid_place(&self) -> bool {
        matches!(
            self,
            PlanError::RotationBlocked | PlanError::ColumnOutOfBounds | PlanError::ColumnBlocked
        )
    }

    pub fn code(&self) -> &'static str {
        match self {
            PlanError::NotPlayable => "not_playable",
            PlanError::RotationBlocked
            | PlanError::ColumnOutOfBounds
            | PlanError::ColumnBlocked => "invalid_place",
            PlanError::Engine(_) => "engine_error",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            PlanError::NotPlayable => "game is over",
            PlanError::RotationBlocked => "could not rotate to target orientation",
            PlanError::ColumnOutOfBounds => "target column would place piece out of bounds",
            PlanError::ColumnBlocked => "could not slide to target column due to collision",
            PlanError::Engine(_) => "engine rejected a piece update",
        }
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::Engine(e) => write!(f, "{}: {e}", self.message()),
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for PlanError {}

impl From<SessionError> for PlanError {
    fn from(e: SessionError) -> Self {
        PlanError::Engine(e)
    }
}

/// Rotate the active piece `rotations` times clockwise, slide it so its
/// leftmost square sits in column `target_x`, then hard drop.
///
/// On any failure before the drop the session is restored to its prior state.
pub fn apply_place(
    session: &mut Session,
    rotations: u8,
    target_x: i32,
) -> Result<StepOutcome, PlanError> {
    if session.is_game_over() || session.active().is_none() {
        return Err(PlanError::NotPlayable);
    }

    let snapshot = session.clone();
    match position(session, rotations, target_x) {
        Ok(()) => Ok(session.hard_drop()?),
        Err(e) => {
            *session = snapshot;
            Err(e)
        }
    }
}

fn position(session: &mut Session, rotations: u8, target_x: i32) -> Result<(), PlanError> {
    for _ in 0..rotations % 4 {
        if !session.try_rotate()? {
            return Err(PlanError::RotationBlocked);
        }
    }

    let (left, right) = session
        .active()
        .and_then(|piece| {
            let xs = piece.squares().iter().map(|s| s.x);
            Some((xs.clone().min()?, xs.max()?))
        })
        .ok_or(PlanError::NotPlayable)?;

    let width = session.grid().width() as i32;
    if target_x < 0 || target_x + (right - left) >= width {
        return Err(PlanError::ColumnOutOfBounds);
    }

    let step = (target_x - left).signum();
    for _ in 0..(target_x - left).abs() {
        if !session.try_move(step, 0)? {
            return Err(PlanError::ColumnBlocked);
        }
    }
    Ok(())
}

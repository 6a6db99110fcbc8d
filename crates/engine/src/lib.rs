//! Reference driver for the rules engine.
//!
//! [`Session`] owns one grid and its active piece and applies the
//! commit-or-rollback protocol; [`apply_place`] positions and drops a piece in
//! one call. Neither knows about time or input.

pub mod place;
pub mod session;

pub use place::{apply_place, PlanError};
pub use session::{Session, SessionConfig, SessionError, StepOutcome};

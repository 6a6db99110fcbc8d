//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates as `blockfall::{types, core, engine}` and
//! hosts the simulator's command-line options.

pub mod options;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

//! Headless simulator (default binary).
//!
//! Drives a `Session` with a seeded random placement policy, then prints the
//! final grid and a summary. There is no rendering, timing or input here.

use anyhow::{Context, Result};
use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, WriteMode};

use blockfall::core::SimpleRng;
use blockfall::engine::{apply_place, Session, StepOutcome};
use blockfall::options::SimOptions;

fn main() -> Result<()> {
    let options = SimOptions::parse();
    let _logger = Logger::try_with_env_or_str(options.log_level.as_deref().unwrap_or("info"))?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(match cfg!(debug_assertions) {
            true => AdaptiveFormat::WithThread,
            _ => AdaptiveFormat::Default,
        })
        .start()?;

    let config = options.session_config()?;
    let mut session = Session::new(config).context("failed to start session")?;
    let mut policy = SimpleRng::new(options.seed.wrapping_add(1));

    while session.pieces_placed() < options.pieces && !session.is_game_over() {
        let rotations = policy.next_range(4) as u8;
        let target_x = policy.next_range(session.grid().width() as u32) as i32;

        let outcome = match apply_place(&mut session, rotations, target_x) {
            Ok(outcome) => outcome,
            Err(e) if e.is_invalid_place() => {
                log::trace!("plan ({rotations}, {target_x}) rejected: {e}");
                session.hard_drop().context("hard drop failed")?
            }
            Err(e) => return Err(e).context("placement failed"),
        };

        if let StepOutcome::Landed { rows_cleared } = outcome {
            if rows_cleared > 0 {
                log::info!(
                    "piece {}: cleared {} rows ({} total)",
                    session.pieces_placed(),
                    rows_cleared,
                    session.rows_cleared()
                );
            }
        }
    }

    println!("{}", session.grid());
    println!(
        "pieces placed: {}, rows cleared: {}, game over: {}",
        session.pieces_placed(),
        session.rows_cleared(),
        session.is_game_over()
    );
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;

use crate::core::shapes::parse_shape;
use crate::engine::SessionConfig;
use crate::types::{ShapeId, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};

/// Headless simulation of the rules engine with a seeded random placer.
#[derive(Parser, Debug, Clone)]
#[command(name = "blockfall-sim", version)]
pub struct SimOptions {
    /// Log filter, e.g. "debug" or "blockfall_engine=debug"; RUST_LOG takes precedence
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(long, default_value_t = DEFAULT_GRID_WIDTH)]
    pub width: u16,

    #[arg(long, default_value_t = DEFAULT_GRID_HEIGHT)]
    pub height: u16,

    #[arg(short, long, default_value_t = 1)]
    pub seed: u32,

    /// Stop after this many pieces have been placed
    #[arg(short, long, default_value_t = 100)]
    pub pieces: u32,

    /// Restrict spawns to these shapes, e.g. "ilo"
    #[arg(long)]
    pub shapes: Option<String>,
}

impl SimOptions {
    pub fn shape_list(&self) -> Result<Vec<ShapeId>> {
        let Some(names) = &self.shapes else {
            return Ok(Vec::new());
        };
        names
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ',')
            .map(|c| parse_shape(&c.to_string()).with_context(|| format!("in --shapes {names:?}")))
            .collect()
    }

    pub fn session_config(&self) -> Result<SessionConfig> {
        Ok(SessionConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            shapes: self.shape_list()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = SimOptions::parse_from(["blockfall-sim"]);
        let config = options.session_config().unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(options.pieces, 100);
    }

    #[test]
    fn shape_restriction() {
        let options = SimOptions::parse_from(["blockfall-sim", "--shapes", "I, o"]);
        assert_eq!(options.shape_list().unwrap(), vec![ShapeId::I, ShapeId::O]);

        let bad = SimOptions::parse_from(["blockfall-sim", "--shapes", "iq"]);
        let err = bad.shape_list().unwrap_err();
        assert!(format!("{err:#}").contains("unknown shape \"q\""));
    }
}

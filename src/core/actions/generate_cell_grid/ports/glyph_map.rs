use crate::core::data::cell::Cell;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphMapError {
    #[error("max iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

pub trait GlyphMap {
    fn map(&self, iterations: u32, frame: u64) -> Result<Cell, GlyphMapError>;
}

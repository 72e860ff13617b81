use crate::core::actions::generate_cell_grid::ports::glyph_map::{GlyphMap, GlyphMapError};
use crate::core::data::cell_grid::{CellGrid, CellGridError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateCellGridError {
    #[error("glyph map error: {0}")]
    GlyphMap(#[from] GlyphMapError),
    #[error("cell grid error: {0}")]
    CellGrid(#[from] CellGridError),
}

/// Overwrites every cell of `grid` with the glyph for the matching escape
/// count. `input` must be row-major and cover the whole grid.
pub fn generate_cell_grid<M: GlyphMap>(
    input: &[u32],
    mapper: &M,
    frame: u64,
    grid: &mut CellGrid,
) -> Result<(), GenerateCellGridError> {
    let grid_size = grid.size().size();
    if input.len() != grid_size {
        return Err(CellGridError::BoundsMismatch {
            grid_size,
            value_count: input.len(),
        }
        .into());
    }

    for (cell, &iterations) in grid.cells_mut().iter_mut().zip(input) {
        *cell = mapper.map(iterations, frame)?;
    }

    Ok(())
}

use crate::core::actions::generate_cell_grid::generate_cell_grid::GenerateCellGridError;
use crate::core::actions::generate_cell_grid::ports::glyph_map::GlyphMapError;
use crate::core::data::cell_grid::CellGridError;
use crate::core::fractals::algorithm::EscapeTimeError;
use crate::core::util::cell_to_complex_coords::CellToComplexCoordsError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FrameLoopError {
    #[error("invalid fractal settings: {0}")]
    Algorithm(#[from] EscapeTimeError),
    #[error("invalid glyph settings: {0}")]
    GlyphMap(#[from] GlyphMapError),
    #[error("failed to evaluate fractal: {0}")]
    Evaluate(#[from] CellToComplexCoordsError),
    #[error("failed to render cells: {0}")]
    Render(#[from] GenerateCellGridError),
    #[error("failed to draw status line: {0}")]
    Status(#[from] CellGridError),
    #[error("failed to read input")]
    Input(#[source] io::Error),
    #[error("failed to present frame")]
    Display(#[source] io::Error),
}

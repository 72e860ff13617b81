use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::fractal::Fractal;
use crate::core::util::cell_to_complex_coords::{
    CellToComplexCoordsError, cell_to_complex_coords,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeTimeError {
    #[error("max iterations must be greater than zero")]
    ZeroMaxIterations,
}

#[derive(Debug, PartialEq)]
pub struct EscapeTimeAlgorithm {
    fractal: Fractal,
    grid_size: GridSize,
    region: ComplexRect,
    pan: Complex,
    max_iterations: u32,
}

impl EscapeTimeAlgorithm {
    pub fn new(
        fractal: Fractal,
        grid_size: GridSize,
        region: ComplexRect,
        pan: Complex,
        max_iterations: u32,
    ) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        Ok(Self {
            fractal,
            grid_size,
            region,
            pan,
            max_iterations,
        })
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;
    type Failure = CellToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = cell_to_complex_coords(pixel, self.grid_size, self.region, self.pan)?;

        Ok(self.fractal.escape_time(point, self.max_iterations))
    }

    fn grid_size(&self) -> GridSize {
        self.grid_size
    }
}

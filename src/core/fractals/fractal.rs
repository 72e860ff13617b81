use crate::core::data::complex::Complex;
use crate::core::fractals::fractal_kinds::FractalKinds;
use std::ops::ControlFlow;

/// Squared escape radius; an orbit with `|z|^2 >= 4` is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum Fractal {
    #[default]
    Mandelbrot,
    Julia { constant: Complex },
}

impl Fractal {
    pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.4, 0.6);

    #[must_use]
    pub fn julia(constant: Complex) -> Self {
        Self::Julia { constant }
    }

    #[must_use]
    pub fn kind(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot => FractalKinds::Mandelbrot,
            Self::Julia { .. } => FractalKinds::Julia,
        }
    }

    #[must_use]
    pub fn julia_constant(&self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia { constant } => Some(*constant),
        }
    }

    /// Number of `z = z^2 + c` steps taken before the orbit of `point`
    /// escapes, capped at `max_iterations`.
    ///
    /// Mandelbrot starts from `z = 0` with `c = point`; Julia starts from
    /// `z = point` with its fixed constant.
    #[must_use]
    pub fn escape_time(&self, point: Complex, max_iterations: u32) -> u32 {
        let (z, c) = match *self {
            Self::Mandelbrot => (Complex::ZERO, point),
            Self::Julia { constant } => (point, constant),
        };

        let escaped = (0..max_iterations).try_fold(z, |z, iteration| {
            if z.magnitude_squared() >= ESCAPE_RADIUS_SQUARED {
                ControlFlow::Break(iteration)
            } else {
                ControlFlow::Continue(z.square() + c)
            }
        });

        match escaped {
            ControlFlow::Break(iteration) => iteration,
            ControlFlow::Continue(_) => max_iterations,
        }
    }
}

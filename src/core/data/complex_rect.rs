use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned region of the complex plane, `top_left` holding the minimum
/// real and imaginary bounds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;
        let valid = width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite();

        if !valid {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_bounds(
        xmin: f64,
        xmax: f64,
        ymin: f64,
        ymax: f64,
    ) -> Result<Self, ComplexRectError> {
        Self::new(Complex::new(xmin, ymin), Complex::new(xmax, ymax))
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.top_left.real + self.bottom_right.real) / 2.0,
            imag: (self.top_left.imag + self.bottom_right.imag) / 2.0,
        }
    }

    /// Moves every bound toward (factor < 1) or away from (factor > 1) the
    /// centre: `bound = centre + (bound - centre) * factor`.
    pub fn scaled_about_center(&self, factor: f64) -> Result<Self, ComplexRectError> {
        let center = self.center();
        let scale = |bound: f64, mid: f64| mid + (bound - mid) * factor;

        Self::new(
            Complex {
                real: scale(self.top_left.real, center.real),
                imag: scale(self.top_left.imag, center.imag),
            },
            Complex {
                real: scale(self.bottom_right.real, center.real),
                imag: scale(self.bottom_right.imag, center.imag),
            },
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }
}

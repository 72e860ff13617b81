use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::navigation::limits::NavigationLimits;

const STARTING_XMIN: f64 = -2.0;
const STARTING_XMAX: f64 = 1.0;
const STARTING_YMIN: f64 = -1.5;
const STARTING_YMAX: f64 = 1.5;

/// Mutable view state carried across frames.
///
/// `zoom_factor` is cumulative: it is applied to `region` on every frame, so a
/// factor other than 1.0 keeps zooming until it is brought back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub region: ComplexRect,
    pub pan: Complex,
    pub zoom_factor: f64,
    pub pan_speed: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(limits: &NavigationLimits) -> Self {
        Self {
            region: starting_region(),
            pan: Complex::ZERO,
            zoom_factor: 1.0,
            pan_speed: limits.initial_pan_speed,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(&NavigationLimits::default())
    }
}

#[must_use]
pub fn starting_region() -> ComplexRect {
    ComplexRect::from_bounds(STARTING_XMIN, STARTING_XMAX, STARTING_YMIN, STARTING_YMAX)
        .expect("starting region is valid")
}

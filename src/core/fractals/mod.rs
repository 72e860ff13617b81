pub mod algorithm;
pub mod fractal;
pub mod fractal_kinds;

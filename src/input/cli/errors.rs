use thiserror::Error;

/// One-line usage printed on stdout when the arguments are rejected.
pub const USAGE: &str = "usage: fractal_term [mandelbrot | julia [<real> <imag>]]";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UsageError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("mandelbrot mode takes no constant")]
    UnexpectedConstant,
    #[error("julia mode needs both a real and an imaginary part")]
    IncompleteConstant,
    #[error("julia constant must be finite: {real}, {imag}")]
    NonFiniteConstant { real: f64, imag: f64 },
}

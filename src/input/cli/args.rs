use crate::core::data::complex::Complex;
use crate::core::fractals::fractal::Fractal;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::input::cli::errors::UsageError;
use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;

#[derive(Debug, Parser)]
#[command(name = "fractal_term", version)]
#[command(about = "Animated ASCII Mandelbrot and Julia explorer for the terminal")]
pub struct CliArgs {
    /// Fractal to draw: mandelbrot or julia
    #[arg(default_value = "mandelbrot")]
    pub mode: FractalKinds,

    /// Real part of the Julia constant
    #[arg(allow_negative_numbers = true)]
    pub real: Option<f64>,

    /// Imaginary part of the Julia constant
    #[arg(allow_negative_numbers = true)]
    pub imag: Option<f64>,
}

/// Validated startup choices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchOptions {
    pub fractal: Fractal,
}

impl TryFrom<CliArgs> for LaunchOptions {
    type Error = UsageError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let fractal = match (args.mode, args.real, args.imag) {
            (FractalKinds::Mandelbrot, None, None) => Fractal::Mandelbrot,
            (FractalKinds::Mandelbrot, _, _) => return Err(UsageError::UnexpectedConstant),
            (FractalKinds::Julia, None, None) => Fractal::julia(Fractal::DEFAULT_JULIA_CONSTANT),
            (FractalKinds::Julia, Some(real), Some(imag)) => {
                if !real.is_finite() || !imag.is_finite() {
                    return Err(UsageError::NonFiniteConstant { real, imag });
                }
                Fractal::julia(Complex::new(real, imag))
            }
            (FractalKinds::Julia, _, _) => return Err(UsageError::IncompleteConstant),
        };

        Ok(Self { fractal })
    }
}

#[derive(Debug)]
pub enum ArgsError {
    /// `--help` or `--version`; clap prints it and exits successfully.
    Informational(clap::Error),
    Usage(UsageError),
}

pub fn parse_launch_options<I, T>(args: I) -> Result<LaunchOptions, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = CliArgs::try_parse_from(args).map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ArgsError::Informational(err),
        _ => {
            let rendered = err.to_string();
            let reason = rendered.lines().next().unwrap_or_default().to_string();
            ArgsError::Usage(UsageError::InvalidArguments(reason))
        }
    })?;

    LaunchOptions::try_from(args).map_err(ArgsError::Usage)
}

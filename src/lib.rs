mod controllers;
mod core;
mod input;
mod presenters;

pub use crate::controllers::frame_loop::config::FrameLoopConfig;
pub use crate::controllers::frame_loop::controller::{FrameLoopController, LoopState};
pub use crate::controllers::frame_loop::data::frame_data::FrameData;
pub use crate::controllers::frame_loop::data::loop_outcome::{LoopOutcome, TerminationReason};
pub use crate::controllers::frame_loop::ports::display::DisplayPort;
pub use crate::controllers::frame_loop::ports::input::InputPort;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::grid_size::GridSize;
pub use crate::core::fractals::fractal::Fractal;
pub use crate::core::navigation::commands::NavigationCommand;
pub use crate::input::cli::args::{ArgsError, LaunchOptions, parse_launch_options};
pub use crate::input::cli::errors::USAGE;
pub use crate::input::commands::run_terminal::RunTerminalCommand;
pub use crate::presenters::terminal::presenter::TerminalPresenter;

use crate::controllers::frame_loop::config::FrameLoopConfig;
use crate::controllers::frame_loop::data::frame_data::FrameData;
use crate::controllers::frame_loop::data::loop_outcome::{LoopOutcome, TerminationReason};
use crate::controllers::frame_loop::errors::FrameLoopError;
use crate::controllers::frame_loop::ports::display::DisplayPort;
use crate::controllers::frame_loop::ports::input::InputPort;
use crate::controllers::frame_loop::status_line::status_line;
use crate::core::actions::generate_cell_grid::generate_cell_grid::generate_cell_grid;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::data::cell_grid::CellGrid;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::fractal::Fractal;
use crate::core::glyphs::ascii_glyph_map::AsciiGlyphMap;
use crate::core::glyphs::glyph_ramp::GlyphRamps;
use crate::core::navigation::{Viewport, step_viewport};
use log::{debug, info, trace, warn};
use std::thread;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated(TerminationReason),
}

/// Drives the poll, navigate, render, present cycle for a single fractal.
///
/// The off-screen grid is allocated once and overwritten every frame.
pub struct FrameLoopController<I: InputPort, D: DisplayPort> {
    fractal: Fractal,
    config: FrameLoopConfig,
    glyph_map: AsciiGlyphMap,
    viewport: Viewport,
    grid: CellGrid,
    frame: u64,
    state: LoopState,
    input: I,
    display: D,
}

impl<I: InputPort, D: DisplayPort> FrameLoopController<I, D> {
    pub fn new(
        fractal: Fractal,
        grid_size: GridSize,
        config: FrameLoopConfig,
        input: I,
        display: D,
    ) -> Result<Self, FrameLoopError> {
        let glyph_map = AsciiGlyphMap::new(config.max_iterations, GlyphRamps::shimmer())?;

        Ok(Self {
            fractal,
            config,
            glyph_map,
            viewport: Viewport::new(&config.navigation),
            grid: CellGrid::new(grid_size),
            frame: 0,
            state: LoopState::Running,
            input,
            display,
        })
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Runs one frame. Once terminated, further calls do nothing.
    pub fn step(&mut self) -> Result<LoopState, FrameLoopError> {
        if self.state != LoopState::Running {
            return Ok(self.state);
        }

        if self.frame >= self.config.frame_budget {
            return Ok(self.terminate(TerminationReason::FrameBudgetExhausted));
        }

        self.grid.clear();

        let command = self.input.poll_command().map_err(FrameLoopError::Input)?;
        if let Some(command) = command {
            debug!("frame {}: {:?}", self.frame, command);
        }

        let report = step_viewport(&mut self.viewport, command, &self.config.navigation);
        if report.quit_requested {
            return Ok(self.terminate(TerminationReason::QuitRequested));
        }

        if let Some(warning) = report.warning {
            warn!(
                "frame {}: {:?} at zoom factor {}",
                self.frame, warning, self.viewport.zoom_factor
            );
        }

        let start = Instant::now();
        self.render()?;
        let render_duration = start.elapsed();

        self.display
            .present(&FrameData {
                frame: self.frame,
                cells: &self.grid,
                render_duration,
            })
            .map_err(FrameLoopError::Display)?;

        trace!("frame {} rendered in {:?}", self.frame, render_duration);
        self.frame += 1;

        Ok(self.state)
    }

    /// Steps until the loop terminates, sleeping the frame interval between
    /// presented frames.
    pub fn run(&mut self) -> Result<LoopOutcome, FrameLoopError> {
        loop {
            match self.step()? {
                LoopState::Running => {
                    if !self.config.frame_interval.is_zero() {
                        thread::sleep(self.config.frame_interval);
                    }
                }
                LoopState::Terminated(reason) => {
                    return Ok(LoopOutcome {
                        reason,
                        frames_drawn: self.frame,
                    });
                }
            }
        }
    }

    fn render(&mut self) -> Result<(), FrameLoopError> {
        let algorithm = EscapeTimeAlgorithm::new(
            self.fractal,
            self.grid.size(),
            self.viewport.region,
            self.viewport.pan,
            self.config.max_iterations,
        )?;

        let iterations = generate_fractal(&algorithm)?;
        generate_cell_grid(&iterations, &self.glyph_map, self.frame, &mut self.grid)?;
        self.grid
            .write_text(Point::default(), &status_line(&self.viewport, &self.fractal))?;

        Ok(())
    }

    fn terminate(&mut self, reason: TerminationReason) -> LoopState {
        info!("frame loop ended after {} frames: {}", self.frame, reason);
        self.state = LoopState::Terminated(reason);

        self.state
    }
}

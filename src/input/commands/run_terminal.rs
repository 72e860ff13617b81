use crate::controllers::frame_loop::config::FrameLoopConfig;
use crate::controllers::frame_loop::controller::FrameLoopController;
use crate::controllers::frame_loop::data::loop_outcome::LoopOutcome;
use crate::input::cli::args::LaunchOptions;
use crate::input::terminal::keyboard::CrosstermKeyboard;
use crate::presenters::terminal::presenter::TerminalPresenter;
use crate::presenters::terminal::session::TerminalSession;
use anyhow::Context;
use log::info;
use std::io;

pub struct RunTerminalCommand {
    options: LaunchOptions,
    config: FrameLoopConfig,
}

impl RunTerminalCommand {
    #[must_use]
    pub fn new(options: LaunchOptions) -> Self {
        Self {
            options,
            config: FrameLoopConfig::default(),
        }
    }

    /// Takes over the terminal, runs the frame loop until it ends and hands
    /// the terminal back before returning.
    pub fn execute(&self) -> anyhow::Result<LoopOutcome> {
        let fractal = self.options.fractal;
        let session = TerminalSession::acquire().context("failed to initialise terminal")?;
        let grid_size = session
            .grid_size()
            .context("failed to read terminal size")?;

        info!(
            "starting {} on a {}x{} grid{}",
            fractal.kind(),
            grid_size.width(),
            grid_size.height(),
            fractal
                .julia_constant()
                .map(|constant| format!(" with c = {constant}"))
                .unwrap_or_default()
        );

        let mut controller = FrameLoopController::new(
            fractal,
            grid_size,
            self.config,
            CrosstermKeyboard,
            TerminalPresenter::new(io::stdout()),
        )?;
        let outcome = controller.run();

        drop(session);

        let outcome = outcome.context("frame loop failed")?;
        info!(
            "{} after {} frames",
            outcome.reason, outcome.frames_drawn
        );

        Ok(outcome)
    }
}

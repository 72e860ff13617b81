use crate::core::data::grid_size::GridSize;
use crossterm::cursor;
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{
    self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use log::{debug, info};
use std::io::{self, Write};

/// Holds the terminal in raw, full-screen mode. Dropping the session restores
/// the previous state on every exit path, including errors and panics that
/// unwind.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let session = Self { _private: () };

        execute!(
            io::stdout(),
            EnterAlternateScreen,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        info!("terminal session acquired");

        Ok(session)
    }

    pub fn grid_size(&self) -> io::Result<GridSize> {
        let (width, height) = terminal::size()?;
        debug!("terminal size {width}x{height}");

        GridSize::new(width, height).map_err(io::Error::other)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = io::stdout();

        execute!(out, ResetColor, EnableLineWrap, cursor::Show, LeaveAlternateScreen).ok();
        terminal::disable_raw_mode().ok();
        out.flush().ok();
        info!("terminal session released");
    }
}

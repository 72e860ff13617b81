use crate::controllers::frame_loop::data::frame_data::FrameData;
use crate::controllers::frame_loop::ports::display::DisplayPort;
use crate::core::glyphs::colour_pair::Hue;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};
use std::io::{self, Write};

/// Writes each frame as one synchronized update, switching colours only when
/// the hue changes between neighbouring cells.
pub struct TerminalPresenter<W: Write> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplayPort for TerminalPresenter<W> {
    fn present(&mut self, frame: &FrameData<'_>) -> io::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;

        for (y, row) in frame.cells.rows().enumerate() {
            // rows() yields at most u16::MAX rows
            queue!(self.out, MoveTo(0, y as u16), ResetColor)?;

            let mut active: Option<Hue> = None;
            for cell in row {
                let hue = cell.colour.map(|pair| pair.hue());

                if hue != active {
                    match hue {
                        Some(hue) => queue!(
                            self.out,
                            SetForegroundColor(terminal_colour(hue)),
                            SetBackgroundColor(Color::Black)
                        )?,
                        None => queue!(self.out, ResetColor)?,
                    }
                    active = hue;
                }

                queue!(self.out, Print(cell.glyph))?;
            }
        }

        queue!(self.out, ResetColor, EndSynchronizedUpdate)?;
        self.out.flush()
    }
}

/// The eight normal-intensity ANSI colours, in curses order.
#[must_use]
pub fn terminal_colour(hue: Hue) -> Color {
    match hue {
        Hue::Black => Color::Black,
        Hue::Red => Color::DarkRed,
        Hue::Green => Color::DarkGreen,
        Hue::Yellow => Color::DarkYellow,
        Hue::Blue => Color::DarkBlue,
        Hue::Magenta => Color::DarkMagenta,
        Hue::Cyan => Color::DarkCyan,
        Hue::White => Color::Grey,
    }
}

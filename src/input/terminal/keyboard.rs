use crate::controllers::frame_loop::ports::input::InputPort;
use crate::core::navigation::commands::NavigationCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

/// Non-blocking keyboard input. Reads at most one event per poll.
#[derive(Debug, Default)]
pub struct CrosstermKeyboard;

impl InputPort for CrosstermKeyboard {
    fn poll_command(&mut self) -> io::Result<Option<NavigationCommand>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(command_for_key(key)),
            _ => Ok(None),
        }
    }
}

#[must_use]
pub fn command_for_key(key: KeyEvent) -> Option<NavigationCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // raw mode swallows SIGINT
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(NavigationCommand::Quit);
    }

    match key.code {
        KeyCode::Up => Some(NavigationCommand::PanUp),
        KeyCode::Down => Some(NavigationCommand::PanDown),
        KeyCode::Left => Some(NavigationCommand::PanLeft),
        KeyCode::Right => Some(NavigationCommand::PanRight),
        KeyCode::Char('+' | '=') => Some(NavigationCommand::ZoomIn),
        KeyCode::Char('-' | '_') => Some(NavigationCommand::ZoomOut),
        KeyCode::Char('[') => Some(NavigationCommand::DecreasePanSpeed),
        KeyCode::Char(']') => Some(NavigationCommand::IncreasePanSpeed),
        KeyCode::Char('q' | 'Q') => Some(NavigationCommand::Quit),
        _ => None,
    }
}

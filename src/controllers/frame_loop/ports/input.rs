use crate::core::navigation::commands::NavigationCommand;
use std::io;

pub trait InputPort {
    /// Returns the next pending command without blocking, if any.
    fn poll_command(&mut self) -> io::Result<Option<NavigationCommand>>;
}

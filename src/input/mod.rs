//! Input adapters: command line arguments, keyboard events and the command
//! that wires them to the frame loop.

pub mod cli;
pub mod commands;
pub mod terminal;

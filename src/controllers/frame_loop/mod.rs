pub mod config;
pub mod controller;
pub mod data;
pub mod errors;
pub mod ports;
pub mod status_line;

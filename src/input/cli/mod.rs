pub mod args;
pub mod errors;

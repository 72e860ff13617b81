pub mod actions;
pub mod data;
pub mod fractals;
pub mod glyphs;
pub mod navigation;
pub mod util;

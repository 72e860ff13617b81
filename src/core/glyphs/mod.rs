pub mod ascii_glyph_map;
pub mod colour_pair;
pub mod glyph_ramp;

use crate::core::glyphs::colour_pair::ColourPair;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub colour: Option<ColourPair>,
}

impl Cell {
    /// Empty, uncoloured cell. Also used for points inside the set.
    pub const BLANK: Self = Self {
        glyph: ' ',
        colour: None,
    };

    #[must_use]
    pub const fn coloured(glyph: char, colour: ColourPair) -> Self {
        Self {
            glyph,
            colour: Some(colour),
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

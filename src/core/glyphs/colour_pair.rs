use thiserror::Error;

/// Number of registered colour pairs. Pair `i` (1-based) draws hue `i % 8`
/// on black.
pub const PALETTE_SIZE: u8 = 64;

const HUE_COUNT: u8 = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ColourPairError {
    #[error("colour pair {index} outside of palette 1..=64")]
    OutOfRange { index: u8 },
}

/// The eight basic terminal hues, numbered the way curses numbers them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hue {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Hue {
    pub const ALL: [Self; HUE_COUNT as usize] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ColourPair(u8);

impl ColourPair {
    pub fn new(index: u8) -> Result<Self, ColourPairError> {
        if index == 0 || index > PALETTE_SIZE {
            return Err(ColourPairError::OutOfRange { index });
        }

        Ok(Self(index))
    }

    /// Colour for a cell that escaped after `iterations`, rotated by the frame
    /// counter so static regions still cycle through the palette.
    #[must_use]
    pub fn rotating(iterations: u32, frame: u64) -> Self {
        let offset = (u64::from(iterations) + frame) % u64::from(PALETTE_SIZE);

        // offset < 64, so the pair always lands in 1..=64
        Self(offset as u8 + 1)
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn hue(self) -> Hue {
        Hue::ALL[usize::from(self.0 % HUE_COUNT)]
    }
}

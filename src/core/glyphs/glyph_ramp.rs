use thiserror::Error;

/// Number of frames each ramp stays active before the next one takes over.
pub const FRAMES_PER_RAMP: u64 = 5;

/// Rotations of a sparse-to-dense ramp; stepping through them makes the
/// texture shimmer even when the view is still.
pub const SHIMMER_RAMPS: &[&str] = &[
    " .,~:;+%@#",
    ".,~:;+%@# ",
    ",~:;+%@# .",
    "~:;+%@# .,",
    ":;+%@# .,~",
    ";+%@# .,~:",
    "+%@# .,~:;",
    "%@# .,~:;+",
    "%@# .,~:;+",
    "@# .,~:;+%",
    "# .,~:;+*%",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphRampError {
    #[error("at least one glyph ramp is required")]
    NoRamps,
    #[error("glyph ramps must not be empty")]
    EmptyRamp,
    #[error("glyph ramp {index} has {found} glyphs, expected {expected}")]
    UnequalLength {
        index: usize,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphRamps {
    ramps: Vec<Vec<char>>,
    ramp_len: usize,
}

impl GlyphRamps {
    pub fn new(ramps: &[&str]) -> Result<Self, GlyphRampError> {
        let ramps: Vec<Vec<char>> = ramps.iter().map(|ramp| ramp.chars().collect()).collect();

        let Some(first) = ramps.first() else {
            return Err(GlyphRampError::NoRamps);
        };

        let ramp_len = first.len();
        if ramp_len == 0 {
            return Err(GlyphRampError::EmptyRamp);
        }

        if let Some((index, ramp)) = ramps
            .iter()
            .enumerate()
            .find(|(_, ramp)| ramp.len() != ramp_len)
        {
            return Err(GlyphRampError::UnequalLength {
                index,
                expected: ramp_len,
                found: ramp.len(),
            });
        }

        Ok(Self { ramps, ramp_len })
    }

    #[must_use]
    pub fn shimmer() -> Self {
        Self::new(SHIMMER_RAMPS).expect("built-in glyph ramps are valid")
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ramps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ramps.is_empty()
    }

    #[must_use]
    pub fn ramp_len(&self) -> usize {
        self.ramp_len
    }

    #[must_use]
    pub fn active_index(&self, frame: u64) -> usize {
        // the modulo keeps the value below len(), which is a usize
        ((frame / FRAMES_PER_RAMP) % self.ramps.len() as u64) as usize
    }

    #[must_use]
    pub fn glyph(&self, frame: u64, index: usize) -> Option<char> {
        self.ramps[self.active_index(frame)].get(index).copied()
    }
}

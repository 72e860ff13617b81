use crate::core::actions::generate_cell_grid::ports::glyph_map::{GlyphMap, GlyphMapError};
use crate::core::data::cell::Cell;
use crate::core::glyphs::colour_pair::ColourPair;
use crate::core::glyphs::glyph_ramp::GlyphRamps;

/// Maps escape counts to shimmering ASCII glyphs. Points that never escaped
/// are left blank.
#[derive(Debug, Clone)]
pub struct AsciiGlyphMap {
    max_iterations: u32,
    ramps: GlyphRamps,
}

impl AsciiGlyphMap {
    pub fn new(max_iterations: u32, ramps: GlyphRamps) -> Result<Self, GlyphMapError> {
        if max_iterations == 0 {
            return Err(GlyphMapError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            ramps,
        })
    }

    fn ramp_index(&self, iterations: u32) -> usize {
        let scaled = u64::from(iterations) * self.ramps.ramp_len() as u64
            / u64::from(self.max_iterations);

        // iterations < max_iterations here, so scaled < ramp_len
        scaled as usize
    }
}

impl GlyphMap for AsciiGlyphMap {
    fn map(&self, iterations: u32, frame: u64) -> Result<Cell, GlyphMapError> {
        if iterations > self.max_iterations {
            return Err(GlyphMapError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if iterations == self.max_iterations {
            return Ok(Cell::BLANK);
        }

        let glyph = self
            .ramps
            .glyph(frame, self.ramp_index(iterations))
            .unwrap_or(' ');

        Ok(Cell::coloured(glyph, ColourPair::rotating(iterations, frame)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shimmer_map(max_iterations: u32) -> AsciiGlyphMap {
        AsciiGlyphMap::new(max_iterations, GlyphRamps::shimmer()).unwrap()
    }

    #[test]
    fn test_zero_max_iterations_rejected() {
        let result = AsciiGlyphMap::new(0, GlyphRamps::shimmer());

        assert!(matches!(result, Err(GlyphMapError::ZeroMaxIterations)));
    }

    #[test]
    fn test_points_inside_set_are_blank() {
        let mapper = shimmer_map(100);

        for frame in [0, 1, 7, 63, 64, 1_000] {
            assert_eq!(mapper.map(100, frame).unwrap(), Cell::BLANK);
        }
    }

    #[test]
    fn test_iterations_above_max_rejected() {
        let mapper = shimmer_map(100);

        assert_eq!(
            mapper.map(101, 0),
            Err(GlyphMapError::IterationsExceedMax {
                iterations: 101,
                max_iterations: 100
            })
        );
    }

    #[test]
    fn test_first_frame_uses_first_ramp() {
        let mapper = shimmer_map(100);

        assert_eq!(mapper.map(0, 0).unwrap().glyph, ' ');
        assert_eq!(mapper.map(10, 0).unwrap().glyph, '.');
        assert_eq!(mapper.map(55, 0).unwrap().glyph, ';');
        assert_eq!(mapper.map(99, 0).unwrap().glyph, '#');
    }

    #[test]
    fn test_ramp_switches_every_five_frames() {
        let mapper = shimmer_map(100);

        assert_eq!(mapper.map(0, 4).unwrap().glyph, ' ');
        assert_eq!(mapper.map(0, 5).unwrap().glyph, '.');
        assert_eq!(mapper.map(0, 50).unwrap().glyph, '#');
        assert_eq!(mapper.map(0, 55).unwrap().glyph, ' ');
    }

    #[test]
    fn test_escaped_cells_carry_rotating_colour() {
        let mapper = shimmer_map(100);
        let cell = mapper.map(10, 5).unwrap();

        assert_eq!(cell.colour, Some(ColourPair::rotating(10, 5)));
        assert_eq!(cell.colour.map(ColourPair::index), Some(16));
    }

    #[test]
    fn test_glyph_index_never_leaves_ramp() {
        let mapper = shimmer_map(7);

        for iterations in 0..7 {
            let cell = mapper.map(iterations, 0).unwrap();
            assert!(cell.colour.is_some());
        }
    }
}

use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GridSizeError {
    #[error("grid size must be at least 1x1: {width}x{height}")]
    InvalidSize { width: u16, height: u16 },
}

/// Dimensions of the character grid, always anchored at cell (0, 0).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridSize {
    width: u16,
    height: u16,
}

impl GridSize {
    pub fn new(width: u16, height: u16) -> Result<Self, GridSizeError> {
        if width == 0 || height == 0 {
            return Err(GridSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    /// Row-major iterator over every cell in the grid.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width;

        (0..self.height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

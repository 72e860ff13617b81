use crate::core::data::cell::Cell;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellGridError {
    #[error(
        "cell at x:{}, y:{} outside of {}x{} grid",
        .pixel.x,
        .pixel.y,
        .grid.width(),
        .grid.height()
    )]
    CellOutsideBounds { pixel: Point, grid: GridSize },
    #[error("grid size {grid_size} does not match value count {value_count}")]
    BoundsMismatch { grid_size: usize, value_count: usize },
}

/// Off-screen frame: one [`Cell`] per grid position, stored row-major.
///
/// Allocated once for the lifetime of the render loop and overwritten every
/// frame.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGrid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl CellGrid {
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::BLANK; size.size()],
        }
    }

    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.size.width()))
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn get(&self, pixel: Point) -> Result<Cell, CellGridError> {
        let index = self.index_of(pixel)?;

        Ok(self.cells[index])
    }

    pub fn set_cell(&mut self, pixel: Point, cell: Cell) -> Result<(), CellGridError> {
        let index = self.index_of(pixel)?;
        self.cells[index] = cell;

        Ok(())
    }

    /// Row-major mutable view of every cell, for writers that fill the whole
    /// frame in one pass.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Writes `text` left to right starting at `origin`, truncating at the
    /// right edge of the grid. Written cells carry no colour.
    pub fn write_text(&mut self, origin: Point, text: &str) -> Result<(), CellGridError> {
        let start = self.index_of(origin)?;
        let remaining = usize::from(self.size.width() - origin.x);

        for (offset, glyph) in text.chars().take(remaining).enumerate() {
            self.cells[start + offset] = Cell {
                glyph,
                colour: None,
            };
        }

        Ok(())
    }

    fn index_of(&self, pixel: Point) -> Result<usize, CellGridError> {
        if !self.size.contains_point(pixel) {
            return Err(CellGridError::CellOutsideBounds {
                pixel,
                grid: self.size,
            });
        }

        Ok(usize::from(pixel.y) * usize::from(self.size.width()) + usize::from(pixel.x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyphs::colour_pair::ColourPair;

    fn create_grid(width: u16, height: u16) -> CellGrid {
        CellGrid::new(GridSize::new(width, height).unwrap())
    }

    fn red_hash() -> Cell {
        Cell::coloured('#', ColourPair::new(1).unwrap())
    }

    #[test]
    fn test_new_creates_blank_grid() {
        let grid = create_grid(10, 4);

        assert_eq!(grid.cells().len(), 40);
        assert!(grid.cells().iter().all(|&cell| cell == Cell::BLANK));
    }

    #[test]
    fn test_set_cell_valid() {
        let mut grid = create_grid(3, 3);

        grid.set_cell(Point { x: 1, y: 1 }, red_hash()).unwrap();

        assert_eq!(grid.cells()[4], red_hash());
        assert_eq!(grid.get(Point { x: 1, y: 1 }).unwrap(), red_hash());
    }

    #[test]
    fn test_set_cell_bottom_right_corner() {
        let mut grid = create_grid(3, 2);

        grid.set_cell(Point { x: 2, y: 1 }, red_hash()).unwrap();

        assert_eq!(grid.cells()[5], red_hash());
    }

    #[test]
    fn test_set_cell_outside_bounds() {
        let mut grid = create_grid(3, 3);
        let result = grid.set_cell(Point { x: 5, y: 1 }, red_hash());

        assert_eq!(
            result,
            Err(CellGridError::CellOutsideBounds {
                pixel: Point { x: 5, y: 1 },
                grid: grid.size()
            })
        );
    }

    #[test]
    fn test_clear_resets_every_cell() {
        let mut grid = create_grid(2, 2);
        grid.set_cell(Point { x: 0, y: 0 }, red_hash()).unwrap();
        grid.set_cell(Point { x: 1, y: 1 }, red_hash()).unwrap();

        grid.clear();

        assert!(grid.cells().iter().all(|&cell| cell == Cell::BLANK));
    }

    #[test]
    fn test_cells_mut_writes_through() {
        let mut grid = create_grid(2, 2);

        grid.cells_mut()[3] = red_hash();

        assert_eq!(grid.get(Point { x: 1, y: 1 }).unwrap(), red_hash());
    }

    #[test]
    fn test_rows_split_by_width() {
        let mut grid = create_grid(3, 2);
        grid.set_cell(Point { x: 0, y: 1 }, red_hash()).unwrap();

        let rows: Vec<&[Cell]> = grid.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1][0], red_hash());
    }

    #[test]
    fn test_write_text_truncates_at_right_edge() {
        let mut grid = create_grid(5, 2);
        grid.cells_mut().fill(red_hash());

        grid.write_text(Point { x: 2, y: 0 }, "abcdef").unwrap();

        let glyphs: String = grid.rows().next().unwrap().iter().map(|c| c.glyph).collect();
        assert_eq!(glyphs, "##abc");
        assert_eq!(grid.get(Point { x: 2, y: 0 }).unwrap().colour, None);
        assert_eq!(grid.get(Point { x: 1, y: 0 }).unwrap(), red_hash());
        assert_eq!(grid.get(Point { x: 0, y: 1 }).unwrap(), red_hash());
    }
}

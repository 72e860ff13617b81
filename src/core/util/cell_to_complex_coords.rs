use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum CellToComplexCoordsError {
    #[error(
        "cell (x: {}, y: {}) is outside the {}x{} grid",
        .point.x,
        .point.y,
        .grid_size.width(),
        .grid_size.height()
    )]
    PointOutsideGrid { point: Point, grid_size: GridSize },
}

/// Maps a cell to the complex point it samples. The grid spans the region's
/// width and height exactly, so column `width` would land on the right bound
/// and is never sampled. `pan` is added after the mapping.
pub fn cell_to_complex_coords(
    point: Point,
    grid_size: GridSize,
    region: ComplexRect,
    pan: Complex,
) -> Result<Complex, CellToComplexCoordsError> {
    if !grid_size.contains_point(point) {
        return Err(CellToComplexCoordsError::PointOutsideGrid { point, grid_size });
    }

    let real = region.top_left().real
        + region.width() * f64::from(point.x) / f64::from(grid_size.width())
        + pan.real;
    let imag = region.top_left().imag
        + region.height() * f64::from(point.y) / f64::from(grid_size.height())
        + pan.imag;

    Ok(Complex { real, imag })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starting_region() -> ComplexRect {
        ComplexRect::from_bounds(-2.0, 1.0, -1.5, 1.5).unwrap()
    }

    fn terminal_grid() -> GridSize {
        GridSize::new(80, 24).unwrap()
    }

    #[test]
    fn test_top_left_cell_maps_to_region_minimum() {
        let result =
            cell_to_complex_coords(Point { x: 0, y: 0 }, terminal_grid(), starting_region(), Complex::ZERO)
                .unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.5));
    }

    #[test]
    fn test_center_cell_maps_to_region_centre_offset() {
        let grid = terminal_grid();
        let result =
            cell_to_complex_coords(grid.center(), grid, starting_region(), Complex::ZERO).unwrap();

        assert_eq!(result, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_last_cell_stays_inside_region() {
        let grid = terminal_grid();
        let region = starting_region();
        let result =
            cell_to_complex_coords(Point { x: 79, y: 23 }, grid, region, Complex::ZERO).unwrap();

        assert!(result.real < region.bottom_right().real);
        assert!(result.imag < region.bottom_right().imag);
        assert!(region.contains_point(result));
    }

    #[test]
    fn test_pan_is_added_after_mapping() {
        let result = cell_to_complex_coords(
            Point { x: 0, y: 0 },
            terminal_grid(),
            starting_region(),
            Complex::new(4.0, 3.5),
        )
        .unwrap();

        assert_eq!(result, Complex::new(2.0, 2.0));
    }

    #[test]
    fn test_point_outside_grid_returns_err() {
        let grid = GridSize::new(10, 10).unwrap();
        let point = Point { x: 10, y: 0 };
        let result = cell_to_complex_coords(point, grid, starting_region(), Complex::ZERO);

        assert_eq!(
            result,
            Err(CellToComplexCoordsError::PointOutsideGrid {
                point,
                grid_size: grid
            })
        );
    }
}

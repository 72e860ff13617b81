pub mod cell;
pub mod cell_grid;
pub mod complex;
pub mod complex_rect;
pub mod grid_size;
pub mod point;

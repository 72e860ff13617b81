pub mod generate_cell_grid;
pub mod generate_fractal;

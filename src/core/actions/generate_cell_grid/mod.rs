pub mod generate_cell_grid;
pub mod ports;

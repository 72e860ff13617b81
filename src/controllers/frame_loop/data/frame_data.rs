use crate::core::data::cell_grid::CellGrid;
use std::time::Duration;

#[derive(Debug)]
pub struct FrameData<'a> {
    pub frame: u64,
    pub cells: &'a CellGrid,
    pub render_duration: Duration,
}

use crate::core::data::grid_size::GridSize;
use crate::core::data::point::Point;
use std::error::Error;

pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
    fn grid_size(&self) -> GridSize;
}

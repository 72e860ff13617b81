/// A cell position on the display grid, `x` counting columns from the left
/// and `y` rows from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

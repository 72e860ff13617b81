/// Discrete navigation input, at most one per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationCommand {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    DecreasePanSpeed,
    IncreasePanSpeed,
    Quit,
}

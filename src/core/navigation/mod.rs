pub mod commands;
pub mod limits;
pub mod step;
pub mod viewport;

pub use commands::NavigationCommand;
pub use limits::NavigationLimits;
pub use step::{NavigationWarning, ViewportStepReport, step_viewport};
pub use viewport::Viewport;

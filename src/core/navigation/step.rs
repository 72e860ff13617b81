use crate::core::navigation::commands::NavigationCommand;
use crate::core::navigation::limits::NavigationLimits;
use crate::core::navigation::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWarning {
    /// Applying the zoom factor would have produced an empty or non-finite
    /// region; the previous region was kept.
    DegenerateZoomKept,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportStepReport {
    pub quit_requested: bool,
    pub warning: Option<NavigationWarning>,
}

/// Applies one frame's input to the viewport and then rescales the region by
/// the carried zoom factor.
///
/// A quit command returns straight away and leaves the viewport untouched.
pub fn step_viewport(
    viewport: &mut Viewport,
    command: Option<NavigationCommand>,
    limits: &NavigationLimits,
) -> ViewportStepReport {
    let mut report = ViewportStepReport::default();

    if let Some(command) = command {
        if command == NavigationCommand::Quit {
            report.quit_requested = true;
            return report;
        }

        apply_command(viewport, command, limits);
    }

    match viewport.region.scaled_about_center(viewport.zoom_factor) {
        Ok(region) => viewport.region = region,
        Err(_) => report.warning = Some(NavigationWarning::DegenerateZoomKept),
    }

    report
}

fn apply_command(viewport: &mut Viewport, command: NavigationCommand, limits: &NavigationLimits) {
    match command {
        NavigationCommand::PanUp => viewport.pan.imag -= viewport.pan_speed,
        NavigationCommand::PanDown => viewport.pan.imag += viewport.pan_speed,
        NavigationCommand::PanLeft => viewport.pan.real -= viewport.pan_speed,
        NavigationCommand::PanRight => viewport.pan.real += viewport.pan_speed,
        NavigationCommand::ZoomIn => viewport.zoom_factor *= limits.zoom_step,
        NavigationCommand::ZoomOut => viewport.zoom_factor /= limits.zoom_step,
        NavigationCommand::DecreasePanSpeed => viewport.pan_speed *= limits.pan_speed_decrease,
        NavigationCommand::IncreasePanSpeed => viewport.pan_speed *= limits.pan_speed_increase,
        NavigationCommand::Quit => {}
    }
}

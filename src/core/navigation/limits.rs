#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationLimits {
    /// Multiplier applied to the zoom factor by zoom-in; zoom-out divides by it.
    pub zoom_step: f64,
    pub pan_speed_decrease: f64,
    pub pan_speed_increase: f64,
    pub initial_pan_speed: f64,
}

impl Default for NavigationLimits {
    fn default() -> Self {
        Self {
            zoom_step: 0.95,
            pan_speed_decrease: 0.9,
            pan_speed_increase: 1.1,
            initial_pan_speed: 0.0008,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationLimits;

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = NavigationLimits::default();

        assert!(limits.zoom_step.is_finite());
        assert!(limits.zoom_step > 0.0 && limits.zoom_step < 1.0);
        assert!(limits.pan_speed_decrease > 0.0 && limits.pan_speed_decrease < 1.0);
        assert!(limits.pan_speed_increase > 1.0);
        assert!(limits.initial_pan_speed > 0.0);
    }
}

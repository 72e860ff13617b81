use crate::core::navigation::limits::NavigationLimits;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLoopConfig {
    pub max_iterations: u32,
    /// Sleep between presented frames.
    pub frame_interval: Duration,
    /// Number of frames after which the loop ends on its own.
    pub frame_budget: u64,
    pub navigation: NavigationLimits,
}

impl Default for FrameLoopConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            frame_interval: Duration::from_millis(30),
            frame_budget: 1_000_000,
            navigation: NavigationLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FrameLoopConfig::default();

        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.frame_interval, Duration::from_millis(30));
        assert_eq!(config.frame_budget, 1_000_000);
        assert_eq!(config.navigation, NavigationLimits::default());
    }
}

//! Application-level configuration.
//!
//! This module provides configuration types that control how the scheduler
//! behaves: the initial step period and an optional run length.

use antfarm_domain::StepPeriod;

/// Scheduler configuration.
///
/// Controls how often ticks fire and when the run ends on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScheduleConfig {
    /// Period of the first timer; replaceable at runtime.
    pub period: StepPeriod,
    /// Stop after this many ticks. `None` runs until stopped.
    pub max_steps: Option<u64>,
}

impl ScheduleConfig {
    /// Creates a ScheduleConfig with a period in milliseconds (0 becomes 1).
    pub fn with_period_millis(millis: u64) -> Self {
        Self {
            period: StepPeriod::new(millis),
            max_steps: None,
        }
    }

    /// Bounds the run to `steps` ticks.
    pub fn with_max_steps(mut self, steps: impl Into<Option<u64>>) -> Self {
        self.max_steps = steps.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let config = ScheduleConfig::default();
        assert_eq!(config.period, StepPeriod::default());
        assert_eq!(config.max_steps, None);
    }

    #[test]
    fn test_zero_period_coerced() {
        let config = ScheduleConfig::with_period_millis(0).with_max_steps(10);
        assert_eq!(config.period.as_millis(), 1);
        assert_eq!(config.max_steps, Some(10));
    }
}

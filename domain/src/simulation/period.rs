//! Step period value object

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Milliseconds between two ticks, never below 1
///
/// A requested period of 0 is coerced to 1.
///
/// # Example
///
/// ```
/// use antfarm_domain::StepPeriod;
///
/// assert_eq!(StepPeriod::new(0).as_millis(), 1);
/// assert_eq!(StepPeriod::new(500).as_millis(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct StepPeriod(u64);

impl StepPeriod {
    pub const MIN_MILLIS: u64 = 1;
    pub const DEFAULT_MILLIS: u64 = 100;

    pub fn new(millis: u64) -> Self {
        Self(millis.max(Self::MIN_MILLIS))
    }

    pub fn as_millis(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Twice as long, saturating
    pub fn slower(&self) -> Self {
        Self::new(self.0.saturating_mul(2))
    }

    /// Half as long, bottoming out at 1 ms
    pub fn faster(&self) -> Self {
        Self::new(self.0 / 2)
    }
}

impl Default for StepPeriod {
    fn default() -> Self {
        Self(Self::DEFAULT_MILLIS)
    }
}

impl From<u64> for StepPeriod {
    fn from(millis: u64) -> Self {
        Self::new(millis)
    }
}

impl From<StepPeriod> for u64 {
    fn from(period: StepPeriod) -> Self {
        period.0
    }
}

impl std::fmt::Display for StepPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

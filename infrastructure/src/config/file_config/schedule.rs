//! Schedule configuration from TOML (`[schedule]` section)

use antfarm_application::ScheduleConfig;
use antfarm_domain::StepPeriod;
use serde::{Deserialize, Serialize};

/// Raw schedule configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileScheduleConfig {
    /// Milliseconds between ticks (0 is treated as 1)
    pub period_ms: u64,
    /// Stop after this many ticks
    pub max_steps: Option<u64>,
}

impl Default for FileScheduleConfig {
    fn default() -> Self {
        Self {
            period_ms: StepPeriod::DEFAULT_MILLIS,
            max_steps: None,
        }
    }
}

impl FileScheduleConfig {
    pub fn to_schedule_config(&self) -> ScheduleConfig {
        ScheduleConfig::with_period_millis(self.period_ms).with_max_steps(self.max_steps)
    }
}

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::store::DispatchOrder;

/// Upper bound accepted for `reactor.delay_ms`.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub reactor: ReactorConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Store timing and ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactorConfig {
    /// Delay between `SetLoading(true)` and the value change (default: 1000).
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// How overlapping actions are ordered (default: merge).
    #[serde(default)]
    pub ordering: DispatchOrder,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw and spinner tick in milliseconds (default: 100).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_delay_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            ordering: DispatchOrder::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl ReactorConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

//! # Table Configuration
//!
//! Ring size and the three delays of the hakker protocol. Durations are carried in
//! milliseconds so the struct maps one-to-one onto CLI flags, environment variables
//! and serialized config.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Errors raised by [`TableConfig::validate`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// With fewer than two hakkers both neighbours are the same chopstick.
    #[error("A table needs at least 2 hakkers, got {0}")]
    RingTooSmall(u32),

    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),

    /// The retry backoff must exceed the think delay.
    #[error("retry_delay_ms ({retry_ms}) must be longer than think_delay_ms ({think_ms})")]
    RetryNotLonger { retry_ms: u64, think_ms: u64 },
}

/// Settings for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Number of hakkers, which is also the number of chopsticks.
    pub hakkers: u32,
    /// How long a hakker thinks before getting hungry.
    pub think_delay_ms: u64,
    /// How long a hakker eats.
    pub eat_delay_ms: u64,
    /// Backoff after failing to pick up both chopsticks.
    pub retry_delay_ms: u64,
    /// Upper bound of a random extra added to each retry backoff. Zero keeps the
    /// backoff fixed.
    pub retry_jitter_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hakkers: 5,
            think_delay_ms: 5_000,
            eat_delay_ms: 5_000,
            retry_delay_ms: 10_000,
            retry_jitter_ms: 0,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hakkers < 2 {
            return Err(ConfigError::RingTooSmall(self.hakkers));
        }
        for (name, value) in [
            ("think_delay_ms", self.think_delay_ms),
            ("eat_delay_ms", self.eat_delay_ms),
            ("retry_delay_ms", self.retry_delay_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDelay(name));
            }
        }
        if self.retry_delay_ms <= self.think_delay_ms {
            return Err(ConfigError::RetryNotLonger {
                retry_ms: self.retry_delay_ms,
                think_ms: self.think_delay_ms,
            });
        }
        Ok(())
    }

    pub fn timings(&self) -> Timings {
        Timings {
            think: Duration::from_millis(self.think_delay_ms),
            eat: Duration::from_millis(self.eat_delay_ms),
            retry: Duration::from_millis(self.retry_delay_ms),
            retry_jitter: Duration::from_millis(self.retry_jitter_ms),
        }
    }
}

/// The delays a hakker schedules its wake signals with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub think: Duration,
    pub eat: Duration,
    pub retry: Duration,
    pub retry_jitter: Duration,
}

impl Timings {
    /// The next retry backoff: `retry` plus a uniform draw from `[0, retry_jitter]`.
    pub fn retry_delay(&self) -> Duration {
        if self.retry_jitter.is_zero() {
            return self.retry;
        }
        let max = u64::try_from(self.retry_jitter.as_millis()).unwrap_or(u64::MAX);
        self.retry + Duration::from_millis(rand::thread_rng().gen_range(0..=max))
    }
}

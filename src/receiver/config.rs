use std::time::Duration;

use crate::errors::ConfigError;

/// Largest visibility timeout SQS accepts: 12 hours.
pub const MAX_VISIBILITY_TIMEOUT_SECONDS: i64 = 12 * 60 * 60;

/// Visibility timeout used when none is given.
pub const DEFAULT_VISIBILITY_TIMEOUT_SECONDS: i64 = 5;

/// Clamps a requested visibility timeout into `[0, MAX_VISIBILITY_TIMEOUT_SECONDS]`.
pub fn clamp_visibility_timeout(seconds: i64) -> i32 {
    // The upper bound fits in an i32.
    seconds.clamp(0, MAX_VISIBILITY_TIMEOUT_SECONDS) as i32
}

/// Configuration for the SQS poll loop.
///
/// Built once at startup and only ever borrowed afterwards.
///
/// # Fields
/// - `region`: Region used for signing requests.
/// - `queue_name`: Logical queue name, resolved to a URL every cycle.
/// - `endpoint_url`: Service endpoint; empty means the SDK default.
/// - `visibility_timeout_seconds`: How long a received message stays hidden.
/// - `poll_interval`: Pause between cycles; zero polls back to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollConfig {
    pub region: String,
    pub queue_name: String,
    pub endpoint_url: String,
    pub visibility_timeout_seconds: i32,
    pub poll_interval: Duration,
}

impl PollConfig {
    /// Validates raw inputs into a config, clamping the visibility timeout.
    pub fn new(
        region: impl Into<String>,
        queue_name: impl Into<String>,
        endpoint_url: impl Into<String>,
        visibility_timeout_seconds: i64,
        poll_interval: Duration,
    ) -> Result<Self, ConfigError> {
        let queue_name = queue_name.into();
        if queue_name.is_empty() {
            return Err(ConfigError::MissingQueueName);
        }

        Ok(PollConfig {
            region: region.into(),
            queue_name,
            endpoint_url: endpoint_url.into(),
            visibility_timeout_seconds: clamp_visibility_timeout(visibility_timeout_seconds),
            poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_keeps_values_in_range() {
        assert_eq!(clamp_visibility_timeout(-1), 0);
        assert_eq!(clamp_visibility_timeout(i64::MIN), 0);
        assert_eq!(clamp_visibility_timeout(0), 0);
        assert_eq!(clamp_visibility_timeout(5), 5);
        assert_eq!(clamp_visibility_timeout(43_200), 43_200);
        assert_eq!(clamp_visibility_timeout(43_201), 43_200);
        assert_eq!(clamp_visibility_timeout(i64::MAX), 43_200);
    }

    #[test]
    fn clamp_is_idempotent() {
        for t in [-10_000, -1, 0, 1, 30, 43_199, 43_200, 43_201, 999_999] {
            let once = clamp_visibility_timeout(t);
            assert_eq!(clamp_visibility_timeout(i64::from(once)), once);
        }
    }

    #[test]
    fn empty_queue_name_is_rejected() {
        let result = PollConfig::new("us-east-1", "", "http://localhost:4566", 5, Duration::ZERO);
        assert_eq!(result, Err(ConfigError::MissingQueueName));
    }

    #[test]
    fn oversized_timeout_is_clamped() {
        let config = PollConfig::new("us-east-1", "orders", "", 999_999, Duration::ZERO).unwrap();
        assert_eq!(config.visibility_timeout_seconds, 43_200);
    }
}

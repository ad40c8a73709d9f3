//! Planner configuration.

use std::time::Duration as StdDuration;

use chrono::Duration;

/// Default walking speed: 1.4 m/s (about 5 km/h).
const DEFAULT_WALKING_SPEED_MPS: f64 = 1.4;

/// Default jeepney speed: 5.5 m/s (about 20 km/h in city traffic).
const DEFAULT_JEEPNEY_SPEED_MPS: f64 = 5.5;

/// Configuration parameters for journey planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Walking speed used to estimate walk durations (m/s).
    pub walking_speed_mps: f64,

    /// Average jeepney speed used to estimate ride durations (m/s).
    /// Locally matched journeys have no schedule data, so this is the
    /// only source of ride time.
    pub jeepney_speed_mps: f64,

    /// Optional upper bound on the directions gateway call.
    /// An elapsed timeout is treated like any other gateway failure.
    pub gateway_timeout: Option<StdDuration>,
}

impl PlannerConfig {
    /// Create a new configuration with the given speeds.
    pub fn new(walking_speed_mps: f64, jeepney_speed_mps: f64) -> Self {
        Self {
            walking_speed_mps,
            jeepney_speed_mps,
            gateway_timeout: None,
        }
    }

    /// Set the gateway timeout.
    pub fn with_gateway_timeout(mut self, timeout: StdDuration) -> Self {
        self.gateway_timeout = Some(timeout);
        self
    }

    /// Estimated time to walk `meters`.
    pub fn walk_time(&self, meters: f64) -> Duration {
        travel_time(meters, self.walking_speed_mps)
    }

    /// Estimated time to ride `meters` by jeepney.
    pub fn ride_time(&self, meters: f64) -> Duration {
        travel_time(meters, self.jeepney_speed_mps)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WALKING_SPEED_MPS, DEFAULT_JEEPNEY_SPEED_MPS)
    }
}

fn travel_time(meters: f64, speed_mps: f64) -> Duration {
    if speed_mps <= 0.0 || !meters.is_finite() {
        return Duration::zero();
    }
    Duration::seconds((meters / speed_mps).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.walking_speed_mps, 1.4);
        assert_eq!(config.jeepney_speed_mps, 5.5);
        assert!(config.gateway_timeout.is_none());
    }

    #[test]
    fn duration_methods() {
        let config = PlannerConfig::new(2.0, 10.0);

        assert_eq!(config.walk_time(120.0), Duration::seconds(60));
        assert_eq!(config.ride_time(1000.0), Duration::seconds(100));
        assert_eq!(config.walk_time(0.0), Duration::zero());
    }

    #[test]
    fn zero_speed_gives_zero_time() {
        let config = PlannerConfig::new(0.0, 0.0);
        assert_eq!(config.walk_time(500.0), Duration::zero());
    }

    #[test]
    fn custom_timeout() {
        let config = PlannerConfig::default().with_gateway_timeout(StdDuration::from_secs(5));
        assert_eq!(config.gateway_timeout, Some(StdDuration::from_secs(5)));
    }
}

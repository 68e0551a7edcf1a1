use std::time::Duration;

/// Fixed tunables for the capture workflow.
///
/// Constructed once by the process entry point and handed to the components
/// that need it. There is no configuration file and no environment lookup;
/// the defaults are the program's behavior.
#[derive(Clone, Debug)]
pub struct Config {
    /// Pause between hiding the overlay and reading the screen, long enough
    /// for the hide to visually take effect so the overlay tint is not in
    /// the shot.
    pub settle_delay: Duration,
    /// Total lifetime of a toast notification.
    pub notification_timeout: Duration,
    /// Cadence of the tray event pump.
    pub poll_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(100),
            notification_timeout: Duration::from_secs(4),
            poll_interval: Duration::from_millis(50),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_fixed_timings() {
        let config = Config::default();
        assert_eq!(config.settle_delay, Duration::from_millis(100));
        assert_eq!(config.notification_timeout, Duration::from_secs(4));
        assert!(config.poll_interval < config.settle_delay);
    }
}

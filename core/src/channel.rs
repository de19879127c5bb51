//! Channel configuration for dispatcher communication

/// Channel buffer configuration for dispatcher communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Outcome channel buffer size (workers -> aggregator)
    pub outcome_buffer: usize,
}

impl ChannelConfig {
    /// Size the outcome buffer so every request of a run fits without a
    /// worker ever waiting on the aggregator
    pub fn for_requests(total_requests: usize) -> Self {
        Self {
            outcome_buffer: total_requests.max(1),
        }
    }

    /// Whether the buffer can hold `total_requests` outcomes at once
    pub fn holds(&self, total_requests: usize) -> bool {
        self.outcome_buffer >= total_requests && self.outcome_buffer > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_config_for_requests() {
        assert_eq!(ChannelConfig::for_requests(250).outcome_buffer, 250);
        assert_eq!(ChannelConfig::for_requests(0).outcome_buffer, 1);
    }

    #[test]
    fn test_channel_config_holds() {
        let config = ChannelConfig::for_requests(100);
        assert!(config.holds(100));
        assert!(config.holds(1));
        assert!(!config.holds(101));
        assert!(!ChannelConfig { outcome_buffer: 0 }.holds(0));
    }
}

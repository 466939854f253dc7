use std::time::Duration;

pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_MAX_FRIENDS: usize = 100;
pub const DEFAULT_FETCH_DELAY_MS: u64 = 300;

/// Configuration for connection searches
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of hops from the start user
    pub max_depth: usize,
    /// Inspect at most N friends per user
    pub max_friends: usize,
    /// Minimum pause between two friend-list fetches of one search
    pub fetch_delay: Duration,
    /// Abandon the search once this much time has passed
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    pub fn new(max_depth: usize, max_friends: usize, fetch_delay: Duration) -> Self {
        Self {
            max_depth,
            max_friends,
            fetch_delay,
            time_limit: None,
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_friends: DEFAULT_MAX_FRIENDS,
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
            time_limit: None,
        }
    }
}

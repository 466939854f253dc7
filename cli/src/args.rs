use clap::Parser;
use friendpath_core::search_config::{
    DEFAULT_FETCH_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FRIENDS,
};
use friendpath_core::{NodeId, SearchConfig};
use std::time::Duration;

pub const DEFAULT_START_USER_ID: NodeId = 1;

#[derive(Parser, Debug, Clone)]
#[command(name = "friendpath")]
#[command(about = "Find the shortest friend chain between two Roblox users")]
pub struct Args {
    /// Username to reach
    pub target: String,

    /// Username to start from
    #[arg(long, value_name = "USERNAME", conflicts_with = "from_id")]
    pub from: Option<String>,

    /// User id to start from (default: 1)
    #[arg(long, value_name = "ID")]
    pub from_id: Option<NodeId>,

    /// Maximum number of hops between the two users
    #[arg(short = 'd', long, value_name = "HOPS", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Inspect at most N friends per user
    #[arg(short = 'f', long, value_name = "COUNT", default_value_t = DEFAULT_MAX_FRIENDS)]
    pub max_friends: usize,

    /// Pause between friend-list requests, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_FETCH_DELAY_MS)]
    pub delay_ms: u64,

    /// Give up after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Hide profile URLs from output (URLs shown by default)
    #[arg(short = 'u', long)]
    pub hide_urls: bool,

    /// Show user ids in output
    #[arg(short = 'i', long)]
    pub show_ids: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        let config = SearchConfig::new(
            self.max_depth,
            self.max_friends,
            Duration::from_millis(self.delay_ms),
        );

        match self.timeout_secs {
            Some(seconds) => config.with_time_limit(Duration::from_secs(seconds)),
            None => config,
        }
    }
}

pub mod graph;
pub mod memory_graph;
pub mod pathfinding;
pub mod search_config;
pub mod string_normalization;
pub mod throttle;

#[cfg(feature = "remote")]
pub mod roblox;

// Re-export commonly used items
pub use graph::{FetchError, IdentityResolver, NeighborSource, NodeId, Path, SocialGraph};
pub use memory_graph::MemoryGraph;
pub use pathfinding::{ConnectionOutcome, GraphAccessor, SearchStats, find_connection};
pub use search_config::SearchConfig;
pub use throttle::Throttle;

#[cfg(feature = "remote")]
pub use roblox::{RobloxClient, RobloxEndpoints};

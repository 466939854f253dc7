use crate::graph::{NeighborSource, NodeId};
use crate::search_config::SearchConfig;
use crate::throttle::Throttle;
use tokio::time::Instant;
use tracing::warn;

/// Throttled, capped view of a [`NeighborSource`] for one search.
///
/// A failed fetch is logged and reported as an empty friend list, which
/// turns that user into a dead end instead of aborting the traversal.
pub struct GraphAccessor<'a, S> {
    source: &'a S,
    throttle: Throttle,
    max_friends: usize,
    fetch_count: usize,
}

impl<'a, S: NeighborSource> GraphAccessor<'a, S> {
    pub fn new(source: &'a S, config: &SearchConfig) -> Self {
        Self {
            source,
            throttle: Throttle::new(config.fetch_delay),
            max_friends: config.max_friends,
            fetch_count: 0,
        }
    }

    pub async fn neighbors(&mut self, node: NodeId) -> Vec<NodeId> {
        self.throttle.wait().await;
        self.fetch(node).await
    }

    /// Returns `None` without fetching if the throttle would hold the request
    /// past `deadline`.
    pub async fn neighbors_before(&mut self, node: NodeId, deadline: Instant) -> Option<Vec<NodeId>> {
        if !self.throttle.wait_until(deadline).await {
            return None;
        }
        Some(self.fetch(node).await)
    }

    async fn fetch(&mut self, node: NodeId) -> Vec<NodeId> {
        self.fetch_count += 1;
        let result = self.source.fetch_neighbors(node).await;
        self.throttle.finish();

        match result {
            Ok(mut friends) => {
                friends.truncate(self.max_friends);
                friends
            }
            Err(error) => {
                warn!(node, %error, "friend list unavailable, treating user as a dead end");
                Vec::new()
            }
        }
    }

    /// Number of fetches issued so far.
    pub fn fetch_count(&self) -> usize {
        self.fetch_count
    }
}

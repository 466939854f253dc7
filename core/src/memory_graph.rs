use crate::graph::{FetchError, IdentityResolver, NeighborSource, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::Mutex;

/// In-memory [`SocialGraph`](crate::SocialGraph) backed by adjacency lists.
///
/// Friend lists keep insertion order. Users marked with
/// [`fail_user`](Self::fail_user) answer every fetch with an error, and every
/// fetch is recorded so callers can check which users were expanded.
#[derive(Debug, Default)]
pub struct MemoryGraph {
    friends: FxHashMap<NodeId, Vec<NodeId>>,
    usernames: FxHashMap<NodeId, String>,
    failing: FxHashSet<NodeId>,
    fetch_log: Mutex<Vec<NodeId>>,
}

impl MemoryGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from directed `(from, to)` edges.
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let mut graph = Self::new();
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    pub fn add_edge(&mut self, from: NodeId, to: NodeId) {
        self.friends.entry(from).or_default().push(to);
    }

    /// Adds edges in both directions, like a mutual friendship.
    pub fn add_friendship(&mut self, a: NodeId, b: NodeId) {
        self.add_edge(a, b);
        self.add_edge(b, a);
    }

    pub fn add_user(&mut self, id: NodeId, username: &str) {
        self.usernames.insert(id, username.to_string());
    }

    pub fn fail_user(&mut self, id: NodeId) {
        self.failing.insert(id);
    }

    /// Users whose friend lists were requested, in request order.
    pub fn fetch_log(&self) -> Vec<NodeId> {
        self.fetch_log
            .lock()
            .map(|log| log.clone())
            .unwrap_or_default()
    }

    pub fn fetch_count(&self, id: NodeId) -> usize {
        self.fetch_log().iter().filter(|&&logged| logged == id).count()
    }

    fn record_fetch(&self, id: NodeId) {
        if let Ok(mut log) = self.fetch_log.lock() {
            log.push(id);
        }
    }
}

impl NeighborSource for MemoryGraph {
    async fn fetch_neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, FetchError> {
        self.record_fetch(node);

        if self.failing.contains(&node) {
            return Err(FetchError::Unavailable(node));
        }

        Ok(self.friends.get(&node).cloned().unwrap_or_default())
    }
}

impl IdentityResolver for MemoryGraph {
    async fn resolve_user_id(&self, username: &str) -> Result<Option<NodeId>, FetchError> {
        let wanted = username.to_lowercase();
        Ok(self
            .usernames
            .iter()
            .find(|(_, name)| name.to_lowercase() == wanted)
            .map(|(&id, _)| id))
    }

    async fn resolve_username(&self, id: NodeId) -> String {
        self.usernames
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}

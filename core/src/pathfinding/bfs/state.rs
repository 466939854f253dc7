use crate::graph::{NeighborSource, NodeId, Path};
use crate::pathfinding::accessor::GraphAccessor;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tokio::time::Instant;
use tracing::debug;

pub struct FrontierEntry {
    pub node: NodeId,
    pub path: Path,
}

pub enum SearchProgress {
    Reached(Path),
    Exhausted,
    DeadlineReached,
}

pub struct BfsState {
    frontier: VecDeque<FrontierEntry>,
    pub visited: FxHashSet<NodeId>,
}

impl BfsState {
    pub fn new(start: NodeId) -> Self {
        let mut frontier = VecDeque::new();
        let mut visited = FxHashSet::default();

        frontier.push_back(FrontierEntry {
            node: start,
            path: vec![start],
        });
        visited.insert(start);

        Self { frontier, visited }
    }

    /// Marks `neighbor` as seen and returns the extended path, or `None` if
    /// it was already enqueued earlier in this search.
    fn visit_neighbor(&mut self, neighbor: NodeId, path: &[NodeId]) -> Option<Path> {
        if !self.visited.insert(neighbor) {
            return None;
        }

        let mut next_path = Vec::with_capacity(path.len() + 1);
        next_path.extend_from_slice(path);
        next_path.push(neighbor);
        Some(next_path)
    }

    pub async fn find_path_to_target<S: NeighborSource>(
        &mut self,
        target: NodeId,
        accessor: &mut GraphAccessor<'_, S>,
        max_depth: usize,
        deadline: Option<Instant>,
    ) -> SearchProgress {
        while let Some(FrontierEntry { node, path }) = self.frontier.pop_front() {
            let depth = path.len() - 1;
            if depth >= max_depth {
                continue;
            }

            let friends = match deadline {
                Some(deadline) => match accessor.neighbors_before(node, deadline).await {
                    Some(friends) => friends,
                    None => return SearchProgress::DeadlineReached,
                },
                None => accessor.neighbors(node).await,
            };
            debug!(node, depth, friends = friends.len(), "expanded user");

            for friend in friends {
                let Some(next_path) = self.visit_neighbor(friend, &path) else {
                    continue;
                };

                if friend == target {
                    return SearchProgress::Reached(next_path);
                }

                self.frontier.push_back(FrontierEntry {
                    node: friend,
                    path: next_path,
                });
            }
        }

        SearchProgress::Exhausted
    }
}

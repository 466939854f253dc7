mod state;

use crate::graph::{NeighborSource, NodeId};
use crate::pathfinding::accessor::GraphAccessor;
use crate::pathfinding::utils::{ConnectionOutcome, SearchStats};
use crate::search_config::SearchConfig;
use state::{BfsState, SearchProgress};
use tokio::time::Instant;
use tracing::debug;

/// Finds a shortest friend chain from `start` to `target` of at most
/// `config.max_depth` hops.
///
/// Each call owns its frontier, visited set and throttle, so independent
/// searches can run concurrently against the same `source`. Friend lists are
/// fetched one at a time, never in parallel.
pub async fn find_connection<S: NeighborSource>(
    source: &S,
    start: NodeId,
    target: NodeId,
    config: &SearchConfig,
) -> ConnectionOutcome {
    let search_timer = Instant::now();

    if start == target {
        return ConnectionOutcome::Found {
            path: vec![start],
            stats: SearchStats {
                nodes_expanded: 0,
                nodes_discovered: 1,
                elapsed: search_timer.elapsed(),
            },
        };
    }

    let deadline = config.time_limit.map(|limit| search_timer + limit);
    let mut accessor = GraphAccessor::new(source, config);
    let mut bfs_state = BfsState::new(start);

    let progress = bfs_state
        .find_path_to_target(target, &mut accessor, config.max_depth, deadline)
        .await;

    let stats = SearchStats {
        nodes_expanded: accessor.fetch_count(),
        nodes_discovered: bfs_state.visited.len(),
        elapsed: search_timer.elapsed(),
    };

    match progress {
        SearchProgress::Reached(path) => {
            debug!(start, target, hops = path.len() - 1, ?stats, "connection found");
            ConnectionOutcome::Found { path, stats }
        }
        SearchProgress::Exhausted => {
            debug!(start, target, ?stats, "frontier exhausted");
            ConnectionOutcome::NotFound { stats }
        }
        SearchProgress::DeadlineReached => {
            debug!(start, target, ?stats, "search time limit reached");
            ConnectionOutcome::TimedOut { stats }
        }
    }
}

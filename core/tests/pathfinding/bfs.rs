use friendpath_core::{ConnectionOutcome, MemoryGraph, SearchConfig, find_connection};
use std::time::Duration;

fn test_config(max_depth: usize) -> SearchConfig {
    SearchConfig::new(max_depth, 100, Duration::ZERO)
}

/// 1 -> 2 -> 3 -> ... -> n
fn create_chain_graph(length: u64) -> MemoryGraph {
    let edges: Vec<(u64, u64)> = (1..length).map(|id| (id, id + 1)).collect();
    MemoryGraph::from_edges(&edges)
}

#[tokio::test]
async fn test_same_user_needs_no_fetch() {
    let graph = create_chain_graph(4);

    for max_depth in [0, 1, 3] {
        let outcome = find_connection(&graph, 2, 2, &test_config(max_depth)).await;
        assert_eq!(outcome.path(), Some(&[2][..]));
        assert_eq!(outcome.stats().nodes_expanded, 0);
    }

    assert!(graph.fetch_log().is_empty());
}

#[tokio::test]
async fn test_chain_path_is_found() {
    let graph = create_chain_graph(4);

    let outcome = find_connection(&graph, 1, 4, &test_config(3)).await;

    assert_eq!(outcome.path(), Some(&[1, 2, 3, 4][..]));
    assert_eq!(outcome.stats().nodes_expanded, 3);
    assert_eq!(outcome.stats().nodes_discovered, 4);
}

#[tokio::test]
async fn test_shortest_path_preferred_over_longer() {
    // Long route 1 -> 2 -> 3 -> 4 -> 5 is listed first, shortcut 1 -> 6 -> 5 second
    let graph = MemoryGraph::from_edges(&[(1, 2), (2, 3), (3, 4), (4, 5), (1, 6), (6, 5)]);

    let outcome = find_connection(&graph, 1, 5, &test_config(4)).await;

    assert_eq!(outcome.path(), Some(&[1, 6, 5][..]));
}

#[tokio::test]
async fn test_depth_zero_allows_no_hops() {
    let graph = MemoryGraph::from_edges(&[(1, 2)]);

    let outcome = find_connection(&graph, 1, 2, &test_config(0)).await;

    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));
    assert!(graph.fetch_log().is_empty());
}

#[tokio::test]
async fn test_diamond_discovers_target_once() {
    let graph = MemoryGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);

    let outcome = find_connection(&graph, 1, 4, &test_config(2)).await;

    let path = outcome.path().unwrap();
    assert_eq!(path.len(), 3);
    assert_eq!(path[0], 1);
    assert!(path[1] == 2 || path[1] == 3);
    assert_eq!(path[2], 4);

    // Target is reported on first sighting: 3 and 4 are never expanded
    assert_eq!(graph.fetch_log(), vec![1, 2]);
}

#[tokio::test]
async fn test_shared_neighbor_expanded_once() {
    // 1 -> {2, 3}, both point at 4, 4 -> 5, target 6 unreachable
    let graph = MemoryGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4), (4, 5)]);

    let outcome = find_connection(&graph, 1, 6, &test_config(5)).await;

    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));
    assert_eq!(graph.fetch_count(4), 1);
    assert_eq!(outcome.stats().nodes_discovered, 5);
}

#[tokio::test]
async fn test_cycles_terminate() {
    let mut graph = MemoryGraph::new();
    graph.add_friendship(1, 2);
    graph.add_friendship(2, 3);
    graph.add_friendship(3, 1);

    let outcome = find_connection(&graph, 1, 99, &test_config(10)).await;

    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));
    assert_eq!(graph.fetch_log().len(), 3);
}

#[tokio::test]
async fn test_failed_fetch_is_a_dead_end() {
    // Only route to 4 goes through 2, whose friend list cannot be fetched
    let mut graph = MemoryGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 5)]);
    graph.fail_user(2);

    let outcome = find_connection(&graph, 1, 4, &test_config(3)).await;

    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));
    // The rest of the frontier is still expanded after the failure
    assert_eq!(graph.fetch_count(3), 1);
    assert_eq!(graph.fetch_count(5), 1);
}

#[tokio::test]
async fn test_failed_fetch_with_alternate_route() {
    let mut graph = MemoryGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 4)]);
    graph.fail_user(2);

    let outcome = find_connection(&graph, 1, 4, &test_config(2)).await;

    assert_eq!(outcome.path(), Some(&[1, 3, 4][..]));
}

#[tokio::test]
async fn test_friend_cap_truncates_neighbors() {
    let graph = MemoryGraph::from_edges(&[(1, 10), (1, 11), (1, 12)]);
    let config = SearchConfig::new(3, 2, Duration::ZERO);

    let outcome = find_connection(&graph, 1, 12, &config).await;

    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));
    assert_eq!(outcome.stats().nodes_discovered, 3);
}

#[tokio::test]
async fn test_truncated_user_reachable_through_other_edge() {
    // 12 is cut from 1's list but 10 also knows it
    let graph = MemoryGraph::from_edges(&[(1, 10), (1, 11), (1, 12), (10, 12)]);
    let config = SearchConfig::new(3, 2, Duration::ZERO);

    let outcome = find_connection(&graph, 1, 12, &config).await;

    assert_eq!(outcome.path(), Some(&[1, 10, 12][..]));
}

#[tokio::test]
async fn test_depth_bound_is_strict() {
    let graph = create_chain_graph(6);

    let outcome = find_connection(&graph, 1, 6, &test_config(3)).await;
    assert!(matches!(outcome, ConnectionOutcome::NotFound { .. }));

    // Users at the depth bound are discovered but never expanded
    assert_eq!(graph.fetch_log(), vec![1, 2, 3]);

    let outcome = find_connection(&graph, 1, 6, &test_config(5)).await;
    assert_eq!(outcome.path(), Some(&[1, 2, 3, 4, 5, 6][..]));
}

#[tokio::test]
async fn test_shallow_entries_expanded_after_deep_skip() {
    // 1 -> {2, 3}; 2 -> 4; 3 -> 5; 5 -> 6
    let graph = MemoryGraph::from_edges(&[(1, 2), (1, 3), (2, 4), (3, 5), (5, 6)]);

    let outcome = find_connection(&graph, 1, 6, &test_config(3)).await;

    assert_eq!(outcome.path(), Some(&[1, 3, 5, 6][..]));
}

#[tokio::test]
async fn test_independent_searches_start_fresh() {
    let graph = create_chain_graph(3);
    let config = test_config(3);

    let first = find_connection(&graph, 1, 3, &config).await;
    let second = find_connection(&graph, 1, 3, &config).await;

    assert_eq!(first.path(), second.path());
    assert_eq!(graph.fetch_log(), vec![1, 2, 1, 2]);
}

#[tokio::test]
async fn test_concurrent_searches_share_source() {
    let mut graph = MemoryGraph::new();
    graph.add_friendship(1, 2);
    graph.add_friendship(2, 3);
    graph.add_friendship(3, 4);
    let config = test_config(3);

    let (forward, backward) = tokio::join!(
        find_connection(&graph, 1, 4, &config),
        find_connection(&graph, 4, 1, &config),
    );

    assert_eq!(forward.into_path(), Some(vec![1, 2, 3, 4]));
    assert_eq!(backward.into_path(), Some(vec![4, 3, 2, 1]));
}

#[tokio::test(start_paused = true)]
async fn test_time_limit_abandons_search() {
    let graph = create_chain_graph(10);
    let config = SearchConfig::new(20, 100, Duration::from_millis(300))
        .with_time_limit(Duration::from_millis(500));

    let outcome = find_connection(&graph, 1, 10, &config).await;

    // Fetches at 0 and 300 ms; the third would start at 600 ms, past the limit
    assert!(matches!(outcome, ConnectionOutcome::TimedOut { .. }));
    assert_eq!(outcome.stats().nodes_expanded, 2);
    assert_eq!(graph.fetch_log(), vec![1, 2]);
}

#[tokio::test(start_paused = true)]
async fn test_time_limit_never_delays_past_deadline() {
    let graph = create_chain_graph(10);
    let config = SearchConfig::new(20, 100, Duration::from_millis(300))
        .with_time_limit(Duration::from_millis(500));

    let before = tokio::time::Instant::now();
    find_connection(&graph, 1, 10, &config).await;

    assert!(tokio::time::Instant::now() - before < Duration::from_millis(600));
}

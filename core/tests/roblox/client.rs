use crate::fixtures::*;
use friendpath_core::{
    FetchError, IdentityResolver, NeighborSource, SearchConfig, find_connection,
};
use std::time::Duration;

#[tokio::test]
async fn test_fetch_friend_ids() {
    let client = create_test_client().await;

    assert_eq!(client.fetch_neighbors(1).await.unwrap(), vec![2, RATE_LIMITED_USER]);
    // Entries without an id are skipped
    assert_eq!(client.fetch_neighbors(2).await.unwrap(), vec![1, 3]);
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let client = create_test_client().await;

    let result = client.fetch_neighbors(RATE_LIMITED_USER).await;
    assert!(matches!(result, Err(FetchError::Status(429))));
}

#[tokio::test]
async fn test_missing_data_field_is_reported() {
    let client = create_test_client().await;

    let result = client.fetch_neighbors(ERROR_PAYLOAD_USER).await;
    assert!(matches!(result, Err(FetchError::MissingField("data"))));
}

#[tokio::test]
async fn test_resolve_user_id() {
    let client = create_test_client().await;

    assert_eq!(client.resolve_user_id("ROBLOX").await.unwrap(), Some(1));
    // Served from the cache the second time
    assert_eq!(client.resolve_user_id("roblox").await.unwrap(), Some(1));
    assert_eq!(client.resolve_user_id("ghost").await.unwrap(), None);
}

#[tokio::test]
async fn test_resolve_username_falls_back_to_id() {
    let client = create_test_client().await;

    assert_eq!(client.resolve_username(1).await, "Roblox");
    assert_eq!(client.resolve_username(77).await, "77");
}

#[tokio::test]
async fn test_unreachable_service() {
    let client = create_unreachable_client().await;

    let result = client.resolve_user_id("roblox").await;
    assert!(matches!(result, Err(FetchError::Transport(_))));
    assert!(matches!(client.fetch_neighbors(1).await, Err(FetchError::Transport(_))));
    assert_eq!(client.resolve_username(1).await, "1");
}

#[tokio::test]
async fn test_search_through_client_skips_failing_users() {
    let client = create_test_client().await;
    let config = SearchConfig::new(3, 100, Duration::ZERO);

    // 429 is rate limited and becomes a dead end; 3 is still reached via 2
    let outcome = find_connection(&client, 1, 3, &config).await;

    assert_eq!(outcome.path(), Some(&[1, 2, 3][..]));
}

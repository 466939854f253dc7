use crate::models::FindResponse;
use crate::state::AppState;
use friendpath_core::string_normalization::clean_username;
use friendpath_core::{
    ConnectionOutcome, FetchError, IdentityResolver, SearchConfig, SocialGraph, find_connection,
};
use futures::future::join_all;
use std::time::Duration;
use tracing::info;

pub async fn find_connection_between_users<G: SocialGraph>(
    state: &AppState<G>,
    target_name: &str,
    from_name: Option<&str>,
    max_depth: Option<usize>,
) -> Result<FindResponse, FetchError> {
    let Some(target_username) = clean_username(target_name) else {
        return Ok(FindResponse::failure("Invalid username."));
    };
    let Some(target_id) = state.graph.resolve_user_id(&target_username).await? else {
        return Ok(FindResponse::failure("User not found."));
    };

    let start_id = match from_name {
        Some(raw_name) => {
            let Some(from_username) = clean_username(raw_name) else {
                return Ok(FindResponse::failure("Invalid username."));
            };
            match state.graph.resolve_user_id(&from_username).await? {
                Some(user_id) => user_id,
                None => return Ok(FindResponse::failure("Start user not found.")),
            }
        }
        None => state.config.start_user_id,
    };

    let config = search_config_for(&state.config.search, max_depth);
    info!(start_id, target_id, max_depth = config.max_depth, "searching for connection");

    let outcome = find_connection(&state.graph, start_id, target_id, &config).await;
    Ok(build_find_response(&state.graph, outcome).await)
}

/// Requested depth may lower the server's limit but never raise it.
pub fn search_config_for(base: &SearchConfig, requested_depth: Option<usize>) -> SearchConfig {
    match requested_depth {
        Some(depth) => base.clone().with_max_depth(depth.min(base.max_depth)),
        None => base.clone(),
    }
}

pub async fn build_find_response<G: IdentityResolver>(
    graph: &G,
    outcome: ConnectionOutcome,
) -> FindResponse {
    let elapsed = Some(format_elapsed(outcome.stats().elapsed));

    match outcome {
        ConnectionOutcome::Found { path, stats } => {
            // Paths are at most max_depth + 1 long, so resolve all names at once
            let usernames = join_all(path.iter().map(|&user_id| graph.resolve_username(user_id))).await;
            info!(hops = path.len() - 1, ?stats, "connection found");

            FindResponse {
                success: true,
                message: "Connection found!".to_string(),
                elapsed,
                path_user_ids: Some(path),
                path_usernames: Some(usernames),
                search_stats: Some((&stats).into()),
            }
        }
        ConnectionOutcome::NotFound { stats } => {
            info!(?stats, "no connection found");
            FindResponse {
                elapsed,
                search_stats: Some((&stats).into()),
                ..FindResponse::failure("No connection found.")
            }
        }
        ConnectionOutcome::TimedOut { stats } => {
            info!(?stats, "search timed out");
            FindResponse {
                elapsed,
                search_stats: Some((&stats).into()),
                ..FindResponse::failure("Search timed out.")
            }
        }
    }
}

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.1}", elapsed.as_secs_f64())
}

use friendpath_core::string_normalization::clean_username;
use friendpath_core::{ConnectionOutcome, IdentityResolver, NodeId, SocialGraph, find_connection};

use crate::args::{Args, DEFAULT_START_USER_ID};

pub struct SearchRequest {
    pub from_user: NodeId,
    pub to_user: NodeId,
    pub from_name: String,
    pub to_name: String,
    pub search_args: Args,
}

pub struct SearchResult {
    pub outcome: ConnectionOutcome,
    pub path_names: Vec<String>,
    pub from_name: String,
    pub to_name: String,
    pub display_options: Args,
}

pub async fn resolve_user<G: IdentityResolver>(
    raw_name: &str,
    graph: &G,
) -> Result<(NodeId, String), String> {
    let username = clean_username(raw_name)
        .ok_or_else(|| format!("'{}' is not a valid username", raw_name.trim()))?;

    match graph.resolve_user_id(&username).await {
        Ok(Some(user_id)) => Ok((user_id, username)),
        Ok(None) => Err(format!("User '{}' not found", username)),
        Err(error) => Err(format!("Could not look up '{}': {}", username, error)),
    }
}

pub async fn create_search_request<G: IdentityResolver>(
    args: Args,
    graph: &G,
) -> Result<SearchRequest, String> {
    let (to_user, to_name) = resolve_user(&args.target, graph).await?;

    let (from_user, from_name) = match &args.from {
        Some(from) => resolve_user(from, graph).await?,
        None => {
            let start_id = args.from_id.unwrap_or(DEFAULT_START_USER_ID);
            (start_id, graph.resolve_username(start_id).await)
        }
    };

    Ok(SearchRequest {
        from_user,
        to_user,
        from_name,
        to_name,
        search_args: args,
    })
}

pub async fn execute_search<G: SocialGraph>(graph: &G, request: SearchRequest) -> SearchResult {
    let config = request.search_args.search_config();
    let outcome = find_connection(graph, request.from_user, request.to_user, &config).await;

    let mut path_names = Vec::new();
    if let Some(path) = outcome.path() {
        for &user_id in path {
            path_names.push(graph.resolve_username(user_id).await);
        }
    }

    SearchResult {
        outcome,
        path_names,
        from_name: request.from_name,
        to_name: request.to_name,
        display_options: request.search_args,
    }
}

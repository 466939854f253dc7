use crate::models::{FindQuery, FindResponse, HealthResponse};
use crate::pathfinding::find_connection_between_users;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use friendpath_core::SocialGraph;
use std::sync::Arc;
use tracing::error;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Friendpath API is running".to_string(),
    })
}

pub async fn find_connection<G: SocialGraph>(
    State(state): State<Arc<AppState<G>>>,
    Query(params): Query<FindQuery>,
) -> (StatusCode, Json<FindResponse>) {
    let Some(target_name) = non_blank(params.user.as_deref()) else {
        return (
            StatusCode::OK,
            Json(FindResponse::failure("Missing ?user parameter")),
        );
    };
    let from_name = non_blank(params.from.as_deref());

    match find_connection_between_users(&state, target_name, from_name, params.max_depth).await {
        Ok(response) => (StatusCode::OK, Json(response)),
        Err(e) => {
            error!(target_name, error = %e, "identity lookup failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FindResponse::failure(e.to_string())),
            )
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

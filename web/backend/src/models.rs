use friendpath_core::{NodeId, SearchStats};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Deserialize)]
pub struct FindQuery {
    /// Username to reach
    pub user: Option<String>,
    /// Username to start from; the configured start user otherwise
    pub from: Option<String>,
    pub max_depth: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStatsResponse {
    pub nodes_expanded: usize,
    pub nodes_discovered: usize,
}

impl From<&SearchStats> for SearchStatsResponse {
    fn from(stats: &SearchStats) -> Self {
        Self {
            nodes_expanded: stats.nodes_expanded,
            nodes_discovered: stats.nodes_discovered,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FindResponse {
    pub success: bool,
    pub message: String,
    /// Seconds spent searching, one decimal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_user_ids: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_usernames: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_stats: Option<SearchStatsResponse>,
}

impl FindResponse {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            elapsed: None,
            path_user_ids: None,
            path_usernames: None,
            search_stats: None,
        }
    }
}

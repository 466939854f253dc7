use friendpath_core::{ConnectionOutcome, NodeId};
use serde::{Deserialize, Serialize};

use crate::display::profile_url;
use crate::search::SearchResult;

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub max_depth: usize,
    pub max_friends: usize,
    pub delay_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub timed_out: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<JsonUser>>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonUser {
    pub id: NodeId,
    pub name: String,
    pub url: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_expanded: usize,
    pub nodes_discovered: usize,
}

pub fn create_json_output(result: &SearchResult) -> JsonOutput {
    let json_path = result.outcome.path().map(|path| {
        path.iter()
            .zip(&result.path_names)
            .map(|(&user_id, name)| JsonUser {
                id: user_id,
                name: name.clone(),
                url: profile_url(user_id),
            })
            .collect()
    });

    let args = &result.display_options;
    let stats = result.outcome.stats();

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            options: JsonOptions {
                max_depth: args.max_depth,
                max_friends: args.max_friends,
                delay_ms: args.delay_ms,
            },
        },
        result: JsonResult {
            found: result.outcome.is_found(),
            timed_out: matches!(result.outcome, ConnectionOutcome::TimedOut { .. }),
            path: json_path,
        },
        stats: JsonStats {
            search_time_ms: stats.elapsed.as_millis() as u64,
            nodes_expanded: stats.nodes_expanded,
            nodes_discovered: stats.nodes_discovered,
        },
    }
}

pub fn print_json_output(result: &SearchResult) -> Result<(), serde_json::Error> {
    let output = create_json_output(result);
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

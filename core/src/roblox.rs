use crate::graph::{FetchError, IdentityResolver, NeighborSource, NodeId};
use moka::future::Cache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_USERS_URL: &str = "https://users.roblox.com";
pub const DEFAULT_FRIENDS_URL: &str = "https://friends.roblox.com";

const IDENTITY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
pub struct RobloxEndpoints {
    pub users_base: String,
    pub friends_base: String,
    pub request_timeout: Duration,
}

impl Default for RobloxEndpoints {
    fn default() -> Self {
        Self {
            users_base: DEFAULT_USERS_URL.to_string(),
            friends_base: DEFAULT_FRIENDS_URL.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Serialize)]
struct UsernameLookupRequest<'a> {
    usernames: Vec<&'a str>,
}

// Both the username lookup and the friend list answer with `{"data": [...]}`.
#[derive(Debug, Deserialize)]
struct UserListResponse {
    data: Option<Vec<UserEntry>>,
}

#[derive(Debug, Deserialize)]
struct UserEntry {
    id: Option<NodeId>,
}

#[derive(Debug, Deserialize)]
struct UserProfile {
    name: Option<String>,
}

/// Client for the Roblox users and friends web APIs.
///
/// Username/id lookups are cached; friend lists never are, so every search
/// sees the graph as it is at fetch time.
#[derive(Clone)]
pub struct RobloxClient {
    client: Client,
    endpoints: RobloxEndpoints,
    user_ids: Cache<String, NodeId>,
    usernames: Cache<NodeId, String>,
}

impl RobloxClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_endpoints(RobloxEndpoints::default())
    }

    pub fn with_endpoints(endpoints: RobloxEndpoints) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(endpoints.request_timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoints,
            user_ids: build_cache(),
            usernames: build_cache(),
        })
    }

    async fn read_body(response: reqwest::Response) -> Result<String, FetchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))
    }

    async fn fetch_username(&self, id: NodeId) -> Result<String, FetchError> {
        let url = format!("{}/v1/users/{}", self.endpoints.users_base, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        parse_username(&Self::read_body(response).await?)
    }
}

fn build_cache<K, V>() -> Cache<K, V>
where
    K: std::hash::Hash + Eq + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    Cache::builder()
        .max_capacity(10_000)
        .time_to_live(IDENTITY_CACHE_TTL)
        .build()
}

impl NeighborSource for RobloxClient {
    async fn fetch_neighbors(&self, node: NodeId) -> Result<Vec<NodeId>, FetchError> {
        let url = format!("{}/v1/users/{}/friends", self.endpoints.friends_base, node);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let friends = parse_friend_ids(&Self::read_body(response).await?)?;
        debug!(node, friends = friends.len(), "fetched friend list");
        Ok(friends)
    }
}

impl IdentityResolver for RobloxClient {
    async fn resolve_user_id(&self, username: &str) -> Result<Option<NodeId>, FetchError> {
        let cache_key = username.to_lowercase();
        if let Some(id) = self.user_ids.get(&cache_key).await {
            return Ok(Some(id));
        }

        let url = format!("{}/v1/usernames/users", self.endpoints.users_base);
        let response = self
            .client
            .post(&url)
            .json(&UsernameLookupRequest {
                usernames: vec![username],
            })
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let user_id = parse_user_id(&Self::read_body(response).await?)?;
        if let Some(id) = user_id {
            self.user_ids.insert(cache_key, id).await;
        }
        Ok(user_id)
    }

    async fn resolve_username(&self, id: NodeId) -> String {
        if let Some(name) = self.usernames.get(&id).await {
            return name;
        }

        match self.fetch_username(id).await {
            Ok(name) => {
                self.usernames.insert(id, name.clone()).await;
                name
            }
            Err(error) => {
                debug!(id, %error, "username lookup failed");
                id.to_string()
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

fn parse_friend_ids(body: &str) -> Result<Vec<NodeId>, FetchError> {
    let response: UserListResponse = decode(body)?;
    let entries = response.data.ok_or(FetchError::MissingField("data"))?;
    Ok(entries.into_iter().filter_map(|entry| entry.id).collect())
}

fn parse_user_id(body: &str) -> Result<Option<NodeId>, FetchError> {
    let response: UserListResponse = decode(body)?;
    let entries = response.data.ok_or(FetchError::MissingField("data"))?;
    Ok(entries.into_iter().find_map(|entry| entry.id))
}

fn parse_username(body: &str) -> Result<String, FetchError> {
    let profile: UserProfile = decode(body)?;
    profile.name.ok_or(FetchError::MissingField("name"))
}

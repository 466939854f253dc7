use friendpath_core::search_config::{
    DEFAULT_FETCH_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_MAX_FRIENDS,
};
use friendpath_core::{NodeId, RobloxEndpoints, SearchConfig};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_START_USER_ID: NodeId = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server settings, read from the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Start user for searches that do not name one
    pub start_user_id: NodeId,
    pub search: SearchConfig,
    pub endpoints: RobloxEndpoints,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut search = SearchConfig::new(
            parse_var(&lookup, "MAX_DEPTH", DEFAULT_MAX_DEPTH)?,
            parse_var(&lookup, "MAX_FRIENDS", DEFAULT_MAX_FRIENDS)?,
            Duration::from_millis(parse_var(&lookup, "DELAY_MS", DEFAULT_FETCH_DELAY_MS)?),
        );
        if let Some(seconds) = parse_optional_var::<u64, _>(&lookup, "SEARCH_TIMEOUT_SECS")? {
            search = search.with_time_limit(Duration::from_secs(seconds));
        }

        let mut endpoints = RobloxEndpoints::default();
        if let Some(users_base) = lookup("ROBLOX_USERS_URL") {
            endpoints.users_base = users_base.trim_end_matches('/').to_string();
        }
        if let Some(friends_base) = lookup("ROBLOX_FRIENDS_URL") {
            endpoints.friends_base = friends_base.trim_end_matches('/').to_string();
        }

        Ok(Self {
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            start_user_id: parse_var(&lookup, "START_USER_ID", DEFAULT_START_USER_ID)?,
            search,
            endpoints,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            start_user_id: DEFAULT_START_USER_ID,
            search: SearchConfig::default(),
            endpoints: RobloxEndpoints::default(),
        }
    }
}

fn parse_optional_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        None => Ok(None),
    }
}

fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    Ok(parse_optional_var(lookup, key)?.unwrap_or(default))
}

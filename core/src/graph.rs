use std::future::Future;
use thiserror::Error;

/// Identifier of a user in the remote social graph.
pub type NodeId = u64;

/// Ordered chain of users, start first.
pub type Path = Vec<NodeId>;

/// Why a single remote lookup failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("remote service answered with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("response is missing field '{0}'")]
    MissingField(&'static str),

    #[error("user {0} is unavailable")]
    Unavailable(NodeId),
}

/// Raw friend-list lookup. Implementations report failures as-is; capping,
/// throttling and the failure policy are applied by
/// [`GraphAccessor`](crate::pathfinding::GraphAccessor).
pub trait NeighborSource {
    fn fetch_neighbors(
        &self,
        node: NodeId,
    ) -> impl Future<Output = Result<Vec<NodeId>, FetchError>> + Send;
}

/// Username <-> id resolution provided by the identity service.
pub trait IdentityResolver {
    /// `Ok(None)` when no user carries this name.
    fn resolve_user_id(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<NodeId>, FetchError>> + Send;

    /// Falls back to the stringified id when the lookup fails.
    fn resolve_username(&self, id: NodeId) -> impl Future<Output = String> + Send;
}

/// Everything a front end needs to run and present a search.
pub trait SocialGraph: NeighborSource + IdentityResolver + Send + Sync + 'static {}

impl<T> SocialGraph for T where T: NeighborSource + IdentityResolver + Send + Sync + 'static {}

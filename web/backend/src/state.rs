use crate::config::ServerConfig;
use friendpath_core::SocialGraph;

pub struct AppState<G> {
    pub graph: G,
    pub config: ServerConfig,
}

impl<G: SocialGraph> AppState<G> {
    pub fn new(graph: G, config: ServerConfig) -> Self {
        Self { graph, config }
    }
}

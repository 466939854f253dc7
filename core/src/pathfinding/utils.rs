use crate::graph::{NodeId, Path};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Friend lists fetched
    pub nodes_expanded: usize,
    /// Users enqueued, start included
    pub nodes_discovered: usize,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub enum ConnectionOutcome {
    Found { path: Path, stats: SearchStats },
    NotFound { stats: SearchStats },
    TimedOut { stats: SearchStats },
}

impl ConnectionOutcome {
    pub fn path(&self) -> Option<&[NodeId]> {
        match self {
            ConnectionOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            ConnectionOutcome::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    pub fn stats(&self) -> &SearchStats {
        match self {
            ConnectionOutcome::Found { stats, .. }
            | ConnectionOutcome::NotFound { stats }
            | ConnectionOutcome::TimedOut { stats } => stats,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ConnectionOutcome::Found { .. })
    }
}

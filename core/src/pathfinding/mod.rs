pub mod accessor;
pub mod bfs;
pub mod utils;

// Re-export the public functions
pub use accessor::GraphAccessor;
pub use bfs::find_connection;
pub use utils::{ConnectionOutcome, SearchStats};

//! Application state management

use std::sync::Arc;

use synonyms::store::SynonymStore;

use crate::config::ServerConfig;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Synonym relationship store
    pub store: Arc<dyn SynonymStore>,

    /// Server configuration
    pub config: ServerConfig,

    /// Depth used by bounded queries that do not name one
    pub default_max_depth: Option<usize>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn SynonymStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config,
            default_max_depth: None,
        }
    }

    /// Set the depth used by bounded queries that do not name one
    pub fn with_default_max_depth(mut self, depth: Option<usize>) -> Self {
        self.default_max_depth = depth;
        self
    }
}

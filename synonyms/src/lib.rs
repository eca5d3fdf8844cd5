//! # Synonyms
//!
//! An in-memory, concurrent store of synonym relationships between words.
//!
//! Words are case-folded before they are stored or looked up, every link is
//! recorded in both directions, and queries can return either the direct
//! synonyms of a word or everything reachable from it through the synonym
//! graph.
//!
//! ## Quick Start
//!
//! ```rust
//! use synonyms::prelude::*;
//!
//! let store = InMemorySynonymStore::new();
//! store.add("Happy", "cheerful");
//! store.add("cheerful", "joyful");
//!
//! let direct = store.get_synonyms("HAPPY", false);
//! assert!(direct.contains("cheerful"));
//!
//! let all = store.get_synonyms("happy", true);
//! assert_eq!(all.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - **Store**: the [`store::SynonymStore`] trait and its sharded
//!   [`store::InMemorySynonymStore`] implementation
//! - **Config**: layered configuration (defaults, files, environment)
//! - **Logging**: `tracing` subscriber bootstrap shared by binaries
//!
//! The HTTP access layer lives in the separate `synonyms-server` crate.

pub mod config;
pub mod logging;
pub mod store;
pub mod word;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{ConfigBuilder, LogFormat, LogLevel, LoggingConfig, StoreConfig, SynonymsConfig};
    pub use crate::store::{InMemorySynonymStore, StoreStats, SynonymStore};
    pub use crate::word::normalize;
    pub use crate::{Result, SynonymsError};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for the synonyms library
#[derive(Debug, thiserror::Error)]
pub enum SynonymsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Error while loading a synonym dictionary
    #[error("Seed error: {0}")]
    Seed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<crate::config::ConfigError> for SynonymsError {
    fn from(err: crate::config::ConfigError) -> Self {
        SynonymsError::Configuration(err.to_string())
    }
}

/// Result type for synonyms operations
pub type Result<T> = std::result::Result<T, SynonymsError>;

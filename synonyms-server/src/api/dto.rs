//! Data Transfer Objects for the API

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Request to register a synonym pair
///
/// Both fields are optional at the parsing level so that a missing field is
/// reported as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddSynonymRequest {
    /// The word to link
    pub word: Option<String>,

    /// Its synonym
    pub to: Option<String>,
}

/// Request to register a group of mutual synonyms
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AddSynonymGroupRequest {
    /// Words that are all synonyms of each other (at least two)
    pub words: Option<Vec<String>>,
}

/// Query parameters for synonym lookups
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SynonymsQuery {
    /// Word to look up (case-insensitive)
    pub word: Option<String>,

    /// Follow links transitively instead of returning direct synonyms only
    #[serde(default, alias = "transitiveSearch")]
    pub transitive_search: bool,
}

/// Query parameters for depth-bounded lookups
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DepthParams {
    /// Maximum number of links to follow (unbounded when absent and no default is configured)
    pub max_depth: Option<usize>,
}

/// Synonym lookup result
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SynonymsResponse {
    /// The queried word in normalized form
    pub word: String,

    /// Whether the lookup followed links transitively
    pub transitive: bool,

    /// Depth bound applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    /// Matching words, sorted alphabetically
    pub synonyms: Vec<String>,
}

impl SynonymsResponse {
    /// Build a response from an unordered result set
    pub fn new(
        word: String,
        transitive: bool,
        max_depth: Option<usize>,
        synonyms: HashSet<String>,
    ) -> Self {
        let mut synonyms: Vec<String> = synonyms.into_iter().collect();
        synonyms.sort();

        Self {
            word,
            transitive,
            max_depth,
            synonyms,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always "OK" when the server answers
    pub status: String,

    /// Server version
    pub version: String,

    /// Number of known words
    pub words: usize,

    /// Number of synonym links
    pub links: usize,
}

//! Loading synonym dictionaries into a store.
//!
//! A dictionary is a JSON file holding an array of synonym groups, where each
//! group is an array of words that are synonyms of each other:
//!
//! ```json
//! [
//!   ["happy", "cheerful", "joyful"],
//!   ["big", "large"]
//! ]
//! ```

use std::path::Path;

use tracing::{debug, info};

use super::SynonymStore;
use crate::{Result, SynonymsError};

/// Read synonym groups from a JSON dictionary file.
pub fn load_groups<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| {
        SynonymsError::Seed(format!(
            "Failed to read synonym dictionary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
        SynonymsError::Seed(format!(
            "Failed to parse synonym dictionary JSON from '{}': {}",
            path.display(),
            e
        ))
    })?;

    debug!(path = %path.display(), groups = groups.len(), "Loaded synonym dictionary");
    Ok(groups)
}

/// Add every group to the store.
///
/// Returns the number of groups that linked at least one pair. Groups with
/// fewer than two distinct words, such as `["Big", "big"]`, are skipped.
pub fn seed_store(store: &dyn SynonymStore, groups: &[Vec<String>]) -> usize {
    let mut applied = 0;
    let mut links = 0;

    for group in groups {
        let linked = store.add_group(group);
        if linked > 0 {
            applied += 1;
            links += linked;
        }
    }

    info!(
        applied,
        skipped = groups.len() - applied,
        links,
        "Seeded synonym store"
    );
    applied
}

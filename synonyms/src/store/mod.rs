//! Synonym relationship storage.
//!
//! The store keeps an undirected graph of normalized words. Every link is
//! recorded on both endpoints, and lookups either return the direct
//! neighbours of a word or walk the graph to collect everything reachable
//! from it.

mod memory;
pub mod seed;
#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

pub use memory::InMemorySynonymStore;
pub use seed::{load_groups, seed_store};

/// Size of the relationship graph at a point in time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Number of distinct words with at least one link
    pub words: usize,

    /// Number of undirected links, a self-link counting once
    pub links: usize,
}

/// Storage interface for synonym relationships
///
/// Implementations normalize every word with [`crate::word::normalize`]
/// before using it, and must be safe to share between threads.
pub trait SynonymStore: Send + Sync + Debug {
    /// Record `word` and `synonym` as synonyms of each other.
    fn add(&self, word: &str, synonym: &str);

    /// Words linked to `word`.
    ///
    /// With `include_transitive` set, returns every word reachable through
    /// one or more links, never including `word` itself. Unknown words give
    /// an empty set.
    fn get_synonyms(&self, word: &str, include_transitive: bool) -> HashSet<String>;

    /// Words reachable from `word` in at most `max_depth` links, excluding `word`.
    fn get_synonyms_within(&self, word: &str, max_depth: usize) -> HashSet<String>;

    /// Whether `word` has any recorded relationship.
    fn contains(&self, word: &str) -> bool;

    /// Current graph size.
    fn stats(&self) -> StoreStats;

    /// Link every pair of distinct words in a synonym group.
    ///
    /// Words are compared after normalization. Returns the number of pairs
    /// linked, zero when the group has fewer than two distinct words.
    fn add_group(&self, words: &[String]) -> usize {
        let mut distinct: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            let word = crate::word::normalize(word);
            if !distinct.contains(&word) {
                distinct.push(word);
            }
        }

        let mut linked = 0;
        for (i, word) in distinct.iter().enumerate() {
            for synonym in &distinct[i + 1..] {
                self.add(word, synonym);
                linked += 1;
            }
        }
        linked
    }
}

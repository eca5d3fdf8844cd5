//! Sharded in-memory synonym store.

use std::collections::{HashSet, VecDeque};

use dashmap::DashMap;
use tracing::{debug, trace};

use super::{StoreStats, SynonymStore};
use crate::word::normalize;

/// Synonym store backed by a concurrent map of adjacency sets.
///
/// Each word maps to the set of words directly linked to it. Mutation of a
/// set happens under the lock of the shard that owns the key, so writers on
/// unrelated words do not contend with each other.
#[derive(Debug, Default)]
pub struct InMemorySynonymStore {
    graph: DashMap<String, HashSet<String>>,
}

impl InMemorySynonymStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of words with at least one link
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Whether no link has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Insert `to` into the adjacency set of `from`.
    ///
    /// Creating the entry and inserting its first element happen under the
    /// same shard lock; readers never see a key with an empty set.
    fn link(&self, from: &str, to: &str) {
        self.graph
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string());
    }

    /// Snapshot of the neighbours of an already normalized word.
    ///
    /// The shard guard is released before returning.
    fn neighbours(&self, word: &str) -> Option<Vec<String>> {
        self.graph
            .get(word)
            .map(|set| set.iter().cloned().collect())
    }

    /// Breadth-first walk from `origin`, following at most `max_depth` links
    /// when a bound is given.
    fn traverse(&self, origin: &str, max_depth: Option<usize>) -> HashSet<String> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        visited.insert(origin.to_string());
        queue.push_back((origin.to_string(), 0usize));

        while let Some((current, depth)) = queue.pop_front() {
            if max_depth.is_some_and(|max| depth >= max) {
                continue;
            }

            let Some(neighbours) = self.neighbours(&current) else {
                continue;
            };

            for neighbour in neighbours {
                if visited.insert(neighbour.clone()) {
                    queue.push_back((neighbour, depth + 1));
                }
            }
        }

        visited.remove(origin);
        trace!(word = %origin, found = visited.len(), "Traversal finished");
        visited
    }
}

impl SynonymStore for InMemorySynonymStore {
    fn add(&self, word: &str, synonym: &str) {
        let word = normalize(word);
        let synonym = normalize(synonym);

        // Both directions go through separate shard locks; never hold one
        // guard while taking the other.
        self.link(&word, &synonym);
        self.link(&synonym, &word);

        debug!(word = %word, synonym = %synonym, "Linked synonyms");
    }

    fn get_synonyms(&self, word: &str, include_transitive: bool) -> HashSet<String> {
        let word = normalize(word);

        if include_transitive {
            return self.traverse(&word, None);
        }

        self.graph
            .get(&word)
            .map(|set| set.value().clone())
            .unwrap_or_default()
    }

    fn get_synonyms_within(&self, word: &str, max_depth: usize) -> HashSet<String> {
        let word = normalize(word);
        self.traverse(&word, Some(max_depth))
    }

    fn contains(&self, word: &str) -> bool {
        self.graph.contains_key(&normalize(word))
    }

    fn stats(&self) -> StoreStats {
        let mut endpoints = 0;
        let mut self_links = 0;

        for entry in self.graph.iter() {
            endpoints += entry.value().len();
            if entry.value().contains(entry.key()) {
                self_links += 1;
            }
        }

        StoreStats {
            words: self.graph.len(),
            links: (endpoints + self_links) / 2,
        }
    }
}

//! Word normalization.

/// Case-fold a word into the canonical form used as key and value in the store.
///
/// The same rule is applied on insertion and lookup, so spellings that differ
/// only by case resolve to the same entry. Whitespace is left untouched.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use std::thread;

use crate::store::{InMemorySynonymStore, StoreStats, SynonymStore, load_groups, seed_store};

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// happy - cheerful - joyful - festive, plus an unrelated pair
fn chain_store() -> InMemorySynonymStore {
    let store = InMemorySynonymStore::new();
    store.add("happy", "cheerful");
    store.add("cheerful", "joyful");
    store.add("joyful", "festive");
    store.add("unrelated", "unconnected");
    store
}

#[test]
fn test_add_is_symmetric() {
    let store = InMemorySynonymStore::new();
    store.add("big", "large");

    assert!(store.get_synonyms("big", false).contains("large"));
    assert!(store.get_synonyms("large", false).contains("big"));
}

#[test]
fn test_case_insensitive_add_and_lookup() {
    let store = InMemorySynonymStore::new();
    store.add("HaPpY", "CheErful");

    let lower = store.get_synonyms("happy", false);
    let upper = store.get_synonyms("HAPPY", false);

    assert_eq!(lower, set(&["cheerful"]));
    assert_eq!(lower, upper);
}

#[test]
fn test_case_insensitive_transitive() {
    let store = InMemorySynonymStore::new();
    store.add("HaPpY", "CheErful");
    store.add("cheerful", "Joyful");
    store.add("joyfuL", "festIve");
    store.add("unrelated", "unconnected");

    assert_eq!(
        store.get_synonyms("happy", true),
        set(&["cheerful", "joyful", "festive"])
    );
}

#[test]
fn test_direct_returns_only_neighbours() {
    let store = chain_store();
    assert_eq!(store.get_synonyms("happy", false), set(&["cheerful"]));
    assert_eq!(
        store.get_synonyms("cheerful", false),
        set(&["happy", "joyful"])
    );
}

#[test]
fn test_transitive_returns_connected_component() {
    let store = chain_store();
    let result = store.get_synonyms("happy", true);

    assert_eq!(result, set(&["cheerful", "joyful", "festive"]));
    assert!(!result.contains("happy"));
    assert!(!result.contains("unrelated"));
    assert!(!result.contains("unconnected"));
}

#[test]
fn test_cycle_terminates_and_excludes_origin() {
    let store = InMemorySynonymStore::new();
    store.add("a", "b");
    store.add("b", "c");
    store.add("c", "a");

    assert_eq!(store.get_synonyms("a", true), set(&["b", "c"]));
    assert_eq!(store.get_synonyms("b", true), set(&["a", "c"]));
}

#[test]
fn test_unknown_word_is_empty() {
    let store = chain_store();
    assert!(store.get_synonyms("nonexistent", true).is_empty());
    assert!(store.get_synonyms("nonexistent", false).is_empty());
    assert!(!store.contains("nonexistent"));
}

#[test]
fn test_repeated_lookup_is_stable() {
    let store = chain_store();
    let first = store.get_synonyms("joyful", true);
    let second = store.get_synonyms("joyful", true);
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_add_is_idempotent() {
    let store = InMemorySynonymStore::new();
    store.add("quick", "fast");
    store.add("Quick", "FAST");
    store.add("fast", "quick");

    assert_eq!(store.get_synonyms("quick", false), set(&["fast"]));
    assert_eq!(store.get_synonyms("fast", false), set(&["quick"]));
    assert_eq!(store.stats(), StoreStats { words: 2, links: 1 });
}

#[test]
fn test_self_link_kept_in_direct_but_not_transitive() {
    let store = InMemorySynonymStore::new();
    store.add("echo", "Echo");
    store.add("echo", "repeat");

    assert_eq!(store.get_synonyms("echo", false), set(&["echo", "repeat"]));
    assert_eq!(store.get_synonyms("echo", true), set(&["repeat"]));
    assert_eq!(store.stats(), StoreStats { words: 2, links: 2 });
}

#[test]
fn test_empty_strings_are_plain_keys() {
    let store = InMemorySynonymStore::new();
    store.add("", "blank");

    assert_eq!(store.get_synonyms("", false), set(&["blank"]));
    assert_eq!(store.get_synonyms("blank", true), set(&[""]));
}

#[test]
fn test_within_depth() {
    let store = chain_store();

    assert!(store.get_synonyms_within("happy", 0).is_empty());
    assert_eq!(store.get_synonyms_within("happy", 1), set(&["cheerful"]));
    assert_eq!(
        store.get_synonyms_within("happy", 2),
        set(&["cheerful", "joyful"])
    );
    assert_eq!(
        store.get_synonyms_within("HAPPY", 10),
        store.get_synonyms("happy", true)
    );
}

#[test]
fn test_long_chain_does_not_overflow() {
    let store = InMemorySynonymStore::new();
    for i in 0..20_000 {
        store.add(&format!("w{}", i), &format!("w{}", i + 1));
    }

    let result = store.get_synonyms("w0", true);
    assert_eq!(result.len(), 20_000);
    assert!(result.contains("w20000"));
}

#[test]
fn test_add_group_links_every_pair() {
    let store = InMemorySynonymStore::new();
    let linked = store.add_group(&[
        "Big".to_string(),
        "large".to_string(),
        "huge".to_string(),
        "big".to_string(),
    ]);

    assert_eq!(linked, 3);

    assert_eq!(store.get_synonyms("big", false), set(&["large", "huge"]));
    assert_eq!(store.get_synonyms("huge", false), set(&["big", "large"]));
    assert_eq!(store.stats(), StoreStats { words: 3, links: 3 });
}

#[test]
fn test_add_group_too_small_is_noop() {
    let store = InMemorySynonymStore::new();
    assert_eq!(store.add_group(&["lonely".to_string()]), 0);
    assert_eq!(store.add_group(&[]), 0);
    assert_eq!(store.add_group(&["Big".to_string(), "big".to_string()]), 0);

    assert!(store.is_empty());
}

#[test]
fn test_concurrent_adds_on_same_word() {
    let store = Arc::new(InMemorySynonymStore::new());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..250 {
                    store.add("hub", &format!("spoke-{}-{}", t, i));
                    // Identical pair from every thread
                    store.add("hub", "shared");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let direct = store.get_synonyms("hub", false);
    assert_eq!(direct.len(), 8 * 250 + 1);
    assert!(store.get_synonyms("shared", false).contains("hub"));
    assert_eq!(store.stats().links, 8 * 250 + 1);
}

#[test]
fn test_traversal_during_concurrent_writes() {
    let store = Arc::new(InMemorySynonymStore::new());
    store.add("root", "n0");

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..2_000 {
                store.add(&format!("n{}", i), &format!("n{}", i + 1));
                store.add(&format!("n{}", i + 1), "root");
            }
        })
    };

    for _ in 0..50 {
        let found = store.get_synonyms("root", true);
        assert!(!found.contains("root"));
        assert!(found.contains("n0"));
    }

    writer.join().unwrap();
    assert_eq!(store.get_synonyms("root", true).len(), 2_001);
}

#[test]
fn test_load_groups_and_seed() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[["happy", "Cheerful", "joyful"], ["single"], ["Echo", "echo"], ["big", "large"]]"#
    )
    .unwrap();

    let groups = load_groups(file.path()).unwrap();
    assert_eq!(groups.len(), 4);

    let store = InMemorySynonymStore::new();
    let applied = seed_store(&store, &groups);

    assert_eq!(applied, 2);
    assert_eq!(store.get_synonyms("cheerful", false), set(&["happy", "joyful"]));
    assert!(!store.contains("single"));
    assert!(!store.contains("echo"));
    assert_eq!(store.stats(), StoreStats { words: 5, links: 4 });
}

#[test]
fn test_load_groups_rejects_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"happy": "cheerful"}}"#).unwrap();

    let err = load_groups(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse synonym dictionary"));
}

#[test]
fn test_load_groups_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_groups(dir.path().join("missing.json")).unwrap_err();
    assert!(err.to_string().contains("Failed to read synonym dictionary"));
}

//! Property-based tests for locale merging and the breadcrumb slot
//!
//! Uses proptest to check merge precedence over arbitrary fragment lists.

use std::collections::BTreeMap;

use opsconsole_core::locale::{merge, Fragment};
use opsconsole_core::{BreadcrumbItem, BreadcrumbStore};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,4}(\\.[a-z]{1,4}){0,2}").expect("valid regex")
}

fn entries_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map(key_strategy(), "[a-zA-Z0-9 ]{0,12}", 0..12)
}

fn fragments_strategy() -> impl Strategy<Value = Vec<Fragment>> {
    prop::collection::vec(entries_strategy(), 0..6).prop_map(|all| {
        all.into_iter()
            .enumerate()
            .map(|(i, entries)| Fragment {
                name: format!("fragment-{}", i),
                entries,
            })
            .collect()
    })
}

/// Fragments whose key sets do not overlap
fn disjoint_fragments_strategy() -> impl Strategy<Value = Vec<Fragment>> {
    fragments_strategy().prop_map(|fragments| {
        fragments
            .into_iter()
            .enumerate()
            .map(|(i, f)| Fragment {
                entries: f
                    .entries
                    .into_iter()
                    .map(|(k, v)| (format!("f{}.{}", i, k), v))
                    .collect(),
                name: f.name,
            })
            .collect()
    })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every key in the result comes from the last fragment that defines it
    #[test]
    fn last_fragment_wins(fragments in fragments_strategy()) {
        let dict = merge(&fragments);

        let mut expected = BTreeMap::new();
        for fragment in &fragments {
            for (k, v) in &fragment.entries {
                expected.insert(k.as_str(), v.as_str());
            }
        }

        prop_assert_eq!(dict.len(), expected.len());
        for (k, v) in expected {
            prop_assert_eq!(dict.get(k), Some(v));
        }
    }

    /// With disjoint keys the fragment order does not matter
    #[test]
    fn disjoint_merge_is_order_independent(fragments in disjoint_fragments_strategy()) {
        let forward = merge(&fragments);
        let reversed = merge(fragments.iter().rev());
        prop_assert_eq!(forward, reversed);
    }

    /// Merging a fragment with itself changes nothing
    #[test]
    fn merge_is_idempotent(entries in entries_strategy()) {
        let fragment = Fragment { name: "only".to_string(), entries };
        prop_assert_eq!(merge([&fragment]), merge([&fragment, &fragment]));
    }

    /// After any sequence of writes the slot holds exactly the last one
    #[test]
    fn breadcrumb_slot_holds_last_write(
        writes in prop::collection::vec(
            prop::option::of(prop::collection::vec(key_strategy(), 0..4)),
            1..10,
        )
    ) {
        let store = BreadcrumbStore::new();
        for write in &writes {
            store.set(write.as_ref().map(|keys| {
                keys.iter().map(|k| BreadcrumbItem::new(k.clone(), k.clone())).collect()
            }));
        }

        let expected = writes.last().cloned().flatten().map(|keys| {
            keys.into_iter().map(|k| BreadcrumbItem::new(k.clone(), k)).collect::<Vec<_>>()
        });
        prop_assert_eq!(store.get(), expected);
    }
}

#[test]
fn documented_example() {
    let a = Fragment::new("a", [("a", "1")]);
    let b = Fragment::new("b", [("a", "2"), ("b", "3")]);
    let dict = merge([&a, &b]);
    assert_eq!(
        dict.iter().collect::<Vec<_>>(),
        vec![("a", "2"), ("b", "3")]
    );
}

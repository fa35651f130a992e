//! Property tests for document tree construction.

use docnav::{build_tree, DocNode};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

pub fn ident() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9]{0,6}").unwrap()
}

/// Documents shaped like real docs.json files: nested objects with
/// occasional `__`-prefixed metadata.
pub fn doc_strategy() -> impl Strategy<Value = Value> {
    let leaf = (any::<bool>(), ident()).prop_map(|(with_file, name)| {
        let mut object = Map::new();
        if with_file {
            object.insert("__filename".to_string(), json!(format!("src/{name}.py")));
        }
        Value::Object(object)
    });

    leaf.prop_recursive(4, 48, 4, |inner| {
        (
            prop::collection::btree_map(ident(), inner, 0..4),
            any::<bool>(),
        )
            .prop_map(|(children, with_classes)| {
                let mut object = Map::new();
                if with_classes {
                    object.insert(
                        "__classes".to_string(),
                        json!({"C": {"name": "C", "docstring": null, "methods": {}}}),
                    );
                }
                for (key, child) in children {
                    object.insert(key, child);
                }
                Value::Object(object)
            })
    })
}

/// Arbitrary JSON, shaped or not: the build must tolerate anything.
pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z_. ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z_]{0,8}", inner, 0..5)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Walk the tree collecting every canonical, checking the dot-join
/// derivation along the way.
pub fn collect_canonicals(node: &DocNode, prefix: &str, seen: &mut Vec<String>) {
    for (key, child) in &node.children {
        let expected = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        assert_eq!(child.canonical, expected);
        seen.push(child.canonical.clone());
        collect_canonicals(child, &child.canonical, seen);
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every node's canonical equals the dot-join of its
    /// regular-key ancestor chain, and canonicals are unique.
    #[test]
    fn property_canonicals_are_derived_and_unique(raw in doc_strategy()) {
        let tree = build_tree(&raw);

        let mut seen = Vec::new();
        collect_canonicals(&tree, "", &mut seen);

        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), seen.len());
    }

    /// PROPERTY: `build_tree` never panics on arbitrary JSON.
    #[test]
    fn property_build_tree_never_panics(raw in arb_json()) {
        let _ = build_tree(&raw);
    }

    /// PROPERTY: Metadata keys never appear as children.
    #[test]
    fn property_metadata_never_becomes_a_child(raw in doc_strategy()) {
        let tree = build_tree(&raw);

        let mut seen = Vec::new();
        collect_canonicals(&tree, "", &mut seen);
        prop_assert!(seen.iter().all(|c| !c.contains("__")));
    }
}

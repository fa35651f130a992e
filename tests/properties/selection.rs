//! Property tests for selection resolution and the active predicate.

use docnav::{build_tree, is_active_ancestor, resolve, Resolution};
use proptest::prelude::*;

use super::document::{arb_json, collect_canonicals, doc_strategy};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An empty path always resolves to Welcome, never NotFound.
    #[test]
    fn property_empty_path_is_welcome(raw in doc_strategy()) {
        let tree = build_tree(&raw);
        prop_assert!(matches!(resolve(&tree, ""), Resolution::Welcome));
    }

    /// PROPERTY: Every canonical present in a built tree resolves to the
    /// node carrying that canonical.
    #[test]
    fn property_canonicals_round_trip(raw in doc_strategy()) {
        let tree = build_tree(&raw);

        let mut canonicals = Vec::new();
        collect_canonicals(&tree, "", &mut canonicals);

        for path in &canonicals {
            match resolve(&tree, path) {
                Resolution::Found(node) => prop_assert_eq!(&node.canonical, path),
                other => prop_assert!(false, "expected Found for {}, got {:?}", path, other),
            }
        }
    }

    /// PROPERTY: Paths absent from the tree resolve to NotFound.
    #[test]
    fn property_absent_paths_not_found(raw in doc_strategy()) {
        let tree = build_tree(&raw);

        let mut canonicals = Vec::new();
        collect_canonicals(&tree, "", &mut canonicals);

        // The generator's identifiers are at most seven characters, so
        // this segment can never exist in the tree.
        prop_assert!(matches!(
            resolve(&tree, "notarealsegment"),
            Resolution::NotFound
        ));
        for path in canonicals.iter().take(8) {
            let absent = format!("{path}.notarealsegment");
            prop_assert!(matches!(resolve(&tree, &absent), Resolution::NotFound));
        }
    }

    /// PROPERTY: Resolution never panics, whatever the document or path.
    #[test]
    fn property_resolve_never_panics(raw in arb_json(), path in "[a-z_.]{0,24}") {
        let tree = build_tree(&raw);
        let _ = resolve(&tree, &path);
    }

    /// PROPERTY: A selection equal to the canonical is always active.
    #[test]
    fn property_selection_equal_is_active(path in "[a-z.]{0,24}") {
        prop_assert!(is_active_ancestor(&path, &path));
    }

    /// PROPERTY: The predicate is exactly a character-prefix test.
    #[test]
    fn property_active_is_character_prefix(c in "[a-z.]{0,12}", s in "[a-z.]{0,12}") {
        let expected = s.as_bytes().len() >= c.as_bytes().len()
            && &s.as_bytes()[..c.len()] == c.as_bytes();
        prop_assert_eq!(is_active_ancestor(&c, &s), expected);
    }
}

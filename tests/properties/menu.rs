//! Property tests for the navigation menu.

use docnav::ui::menu::{MenuAction, MenuState, MAX_DEPTH};
use docnav::{build_tree, Browser};
use proptest::prelude::*;

use super::document::doc_strategy;

fn action_strategy() -> impl Strategy<Value = MenuAction> {
    prop_oneof![
        Just(MenuAction::Up),
        Just(MenuAction::Down),
        Just(MenuAction::Select),
        Just(MenuAction::Expand),
        Just(MenuAction::Collapse),
        Just(MenuAction::ToggleExpand),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Toggling expansion twice restores the visible rows.
    #[test]
    fn property_toggle_twice_round_trips(
        raw in doc_strategy(),
        walk in prop::collection::vec(action_strategy(), 0..12),
    ) {
        let tree = build_tree(&raw);
        let mut menu = MenuState::new(&tree);

        for action in walk {
            menu.handle_action(action, &tree);
        }

        let before = menu.rows().to_vec();
        menu.handle_action(MenuAction::ToggleExpand, &tree);
        menu.handle_action(MenuAction::ToggleExpand, &tree);
        prop_assert_eq!(menu.rows(), &before[..]);
    }

    /// PROPERTY: The cursor stays within the visible rows under any
    /// action sequence.
    #[test]
    fn property_cursor_stays_in_bounds(
        raw in doc_strategy(),
        walk in prop::collection::vec(action_strategy(), 0..24),
    ) {
        let tree = build_tree(&raw);
        let mut menu = MenuState::new(&tree);

        for action in walk {
            menu.handle_action(action, &tree);
            prop_assert!(menu.rows().is_empty() || menu.cursor() < menu.rows().len());
        }
    }

    /// PROPERTY: Flattened rows never exceed the depth cap.
    #[test]
    fn property_flatten_depth_is_bounded(raw in doc_strategy()) {
        let tree = build_tree(&raw);
        let mut menu = MenuState::new(&tree);
        menu.expand_all(&tree);

        prop_assert!(menu.rows().iter().all(|row| row.depth < MAX_DEPTH));
    }

    /// PROPERTY: Rendering the same state twice yields identical output.
    #[test]
    fn property_render_is_idempotent(
        raw in doc_strategy(),
        walk in prop::collection::vec(action_strategy(), 0..12),
    ) {
        let tree = build_tree(&raw);
        let mut browser = Browser::new("Docs", tree);

        for action in walk {
            browser.handle_action(action);
        }

        prop_assert_eq!(
            browser.compose(80, 24, true),
            browser.compose(80, 24, true)
        );
        prop_assert_eq!(browser.detail_lines(), browser.detail_lines());
    }
}

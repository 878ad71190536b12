//! Property tests for selection lookup.

use proptest::prelude::*;

use srm::{Menu, MenuError, MenuGroup, MenuItem, MenuOptions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an empty menu never resolves anything.
    #[test]
    fn property_empty_menu_never_resolves(key in ".*") {
        let err = Menu::default().lookup(&key).unwrap_err();
        let is_key_not_found = matches!(err, MenuError::KeyNotFound { .. });
        prop_assert!(is_key_not_found);
    }

    /// PROPERTY: the first group holding a non-empty command wins.
    #[test]
    fn property_first_non_empty_group_wins(
        commands in proptest::collection::vec(
            prop_oneof![Just(String::new()), "[a-z]{1,8}"],
            1..6,
        ),
    ) {
        let groups = commands
            .iter()
            .map(|cmd| MenuGroup::from_items([MenuItem::new("Entry", cmd)]));
        let menu = Menu::with_groups(MenuOptions::default(), groups);

        match commands.iter().find(|c| !c.is_empty()) {
            Some(expected) => prop_assert_eq!(menu.lookup("Entry").unwrap(), expected.as_str()),
            None => prop_assert!(menu.lookup("Entry").is_err()),
        }
    }
}

//! Property tests for menu rendering.

use proptest::prelude::*;

use srm::{Menu, MenuGroup, MenuItem, MenuOptions};

fn name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,12}").unwrap()
}

fn groups_of_names() -> impl Strategy<Value = Vec<Vec<String>>> {
    proptest::collection::vec(proptest::collection::vec(name(), 0..5), 0..4)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an unnumbered menu renders as group keys joined by the separator.
    #[test]
    fn property_unnumbered_render_is_join(
        groups in groups_of_names(),
        separator in "[-=*]{1,5}",
    ) {
        let menu_groups: Vec<MenuGroup> = groups
            .iter()
            .map(|names| names.iter().map(|n| MenuItem::new(n, "true")).collect())
            .collect();
        let expected = menu_groups
            .iter()
            .map(|g| g.keys().collect::<Vec<_>>().join("\n"))
            .collect::<Vec<_>>()
            .join(&format!("\n{separator}\n"));

        let menu = Menu::with_groups(
            MenuOptions::default().separator(separator.clone()),
            menu_groups,
        );

        prop_assert_eq!(menu.to_string(), expected);
    }

    /// PROPERTY: re-adding a name keeps its first position and takes the latest command.
    #[test]
    fn property_overwrite_keeps_position(
        names in proptest::collection::vec(name(), 1..6),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut group: MenuGroup = names.iter().map(|n| MenuItem::new(n, "old")).collect();
        let keys_before: Vec<String> = group.keys().map(str::to_string).collect();

        let target = pick.get(&names).clone();
        group.add_item(MenuItem::new(&target, "new"));

        let keys_after: Vec<String> = group.keys().map(str::to_string).collect();
        prop_assert_eq!(keys_before, keys_after);
        prop_assert_eq!(group.get(&target), Some("new"));
    }
}

//! Property tests for numbered menus.

use proptest::prelude::*;

use srm::{IndexFormat, Menu, MenuGroup, MenuItem, MenuOptions};

/// Groups of distinct item names, so numbering never collides.
fn group_sizes() -> impl Strategy<Value = Vec<usize>> {
    proptest::collection::vec(0usize..6, 0..5)
}

fn build_groups(sizes: &[usize]) -> Vec<MenuGroup> {
    let mut n = 0;
    sizes
        .iter()
        .map(|&size| {
            MenuGroup::from_items((0..size).map(|_| {
                n += 1;
                MenuItem::new(format!("item{n}"), format!("cmd{n}"))
            }))
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: indices run contiguously from `index_start` across groups.
    #[test]
    fn property_indices_are_contiguous(
        sizes in group_sizes(),
        start in -50i64..50,
    ) {
        let options = MenuOptions::default()
            .numbered(true)
            .index_start(start)
            .index_format(IndexFormat::new("{item_index}").unwrap());
        let menu = Menu::with_groups(options, build_groups(&sizes));

        let keys: Vec<String> = menu
            .groups()
            .iter()
            .flat_map(|g| g.keys().map(str::to_string).collect::<Vec<_>>())
            .collect();
        let total = sizes.iter().sum::<usize>() as i64;
        let expected: Vec<String> = (start..start + total).map(|i| i.to_string()).collect();

        prop_assert_eq!(keys, expected);
        prop_assert_eq!(menu.number_of_items() as i64, total);
    }

    /// PROPERTY: numbering keeps every command reachable under its new key.
    #[test]
    fn property_numbered_keys_resolve_to_original_commands(
        sizes in group_sizes(),
        start in 0i64..10,
    ) {
        let options = MenuOptions::default().numbered(true).index_start(start);
        let menu = Menu::with_groups(options, build_groups(&sizes));

        let mut index = start;
        for n in 1..=sizes.iter().sum::<usize>() {
            let key = format!("{index} item{n}");
            prop_assert_eq!(menu.lookup(&key).unwrap(), format!("cmd{n}"));
            index += 1;
        }
    }
}

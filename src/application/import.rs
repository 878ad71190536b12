//! Config import
//!
//! Turns a parsed [`MenuConfig`] into a [`Menu`]: items become `MenuItem`s,
//! each `items` list becomes a `MenuGroup`, and the remaining top-level keys
//! become the menu options.

use crate::config::MenuConfig;
use crate::domain::entities::{Menu, MenuGroup, MenuItem};

/// Build a menu from configuration, numbering groups as they are added.
pub fn import_menu_from_config(config: MenuConfig) -> Menu {
    let (options, groups) = config.into_parts();
    let groups = groups.into_iter().map(|group| {
        group
            .items
            .into_iter()
            .map(|item| MenuItem::new(item.name, item.command))
            .collect::<MenuGroup>()
    });
    Menu::with_groups(options, groups)
}

impl From<MenuConfig> for Menu {
    fn from(config: MenuConfig) -> Self {
        import_menu_from_config(config)
    }
}

//! Menu entity - ordered groups plus numbering and layout options
//!
//! A menu is assembled once: every group passes through [`Menu::add_group`],
//! which applies numbering at insertion time. After that it is only rendered
//! or queried.

use std::fmt;

use crate::domain::value_objects::MenuOptions;
use crate::error::{MenuError, SrmResult};

use super::menu_group::MenuGroup;

/// Top-level menu: groups rendered in order, separated by a separator line.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    groups: Vec<MenuGroup>,
    options: MenuOptions,
}

impl Menu {
    /// Create an empty menu
    pub fn new(options: MenuOptions) -> Self {
        Self {
            groups: Vec::new(),
            options,
        }
    }

    /// Create a menu and add each group in order
    pub fn with_groups(options: MenuOptions, groups: impl IntoIterator<Item = MenuGroup>) -> Self {
        let mut menu = Self::new(options);
        for group in groups {
            menu.add_group(group);
        }
        menu
    }

    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    pub fn groups(&self) -> &[MenuGroup] {
        &self.groups
    }

    /// Total entries across all groups added so far
    pub fn number_of_items(&self) -> usize {
        self.groups.iter().map(MenuGroup::len).sum()
    }

    /// Append a group, rewriting its keys first when the menu is numbered.
    ///
    /// Indices continue from the groups already present, starting at
    /// `index_start` for the very first entry.
    pub fn add_group(&mut self, mut group: MenuGroup) {
        if self.options.numbered {
            let offset = i128::from(self.options.index_start) + self.number_of_items() as i128;
            let format = &self.options.index_format;
            group.rekey(|position, name| format.render(offset + position as i128, name));
        }
        self.groups.push(group);
    }

    /// Resolve a selection key to its command.
    ///
    /// Groups are searched in order and the first non-empty command wins.
    /// An entry whose command is the empty string counts as absent.
    pub fn lookup(&self, key: &str) -> SrmResult<&str> {
        self.groups
            .iter()
            .filter_map(|group| group.get(key))
            .find(|command| !command.is_empty())
            .ok_or_else(|| MenuError::KeyNotFound {
                key: key.to_string(),
            })
    }
}

impl PartialEq for Menu {
    fn eq(&self, other: &Self) -> bool {
        self.groups == other.groups && self.options == other.options
    }
}

impl Eq for Menu {}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, "\n{}\n", self.options.separator)?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}

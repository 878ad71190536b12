//! MenuGroup entity - an ordered block of menu lines
//!
//! Entries are keyed by item name. Adding a name that is already present
//! replaces its command in place, so the line keeps its original position.

use std::fmt;

use super::menu_item::MenuItem;

/// Ordered, name-keyed collection of commands rendered as one block.
#[derive(Debug, Clone, Default)]
pub struct MenuGroup {
    /// `(key, command)` in insertion order; keys are unique
    entries: Vec<(String, String)>,
}

impl MenuGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a group from items, applying [`add_item`](Self::add_item) to each.
    pub fn from_items(items: impl IntoIterator<Item = MenuItem>) -> Self {
        let mut group = Self::new();
        for item in items {
            group.add_item(item);
        }
        group
    }

    /// Insert an item, overwriting the command of an existing entry with the same name.
    pub fn add_item(&mut self, item: MenuItem) {
        let (name, command) = item.into_parts();
        self.insert(name, command);
    }

    pub(crate) fn insert(&mut self, key: String, command: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = command,
            None => self.entries.push((key, command)),
        }
    }

    /// Command stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, command)| command.as_str())
    }

    /// Entry keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, command)` pairs in display order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every key with `rename(position, key)`, keeping commands.
    ///
    /// Renamed keys that collide collapse into a single entry, last command wins.
    pub(crate) fn rekey(&mut self, mut rename: impl FnMut(usize, &str) -> String) {
        let old = std::mem::take(&mut self.entries);
        for (position, (key, command)) in old.into_iter().enumerate() {
            let new_key = rename(position, &key);
            self.insert(new_key, command);
        }
    }
}

/// Groups compare by entry count and positional key equality; commands are ignored.
impl PartialEq for MenuGroup {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.keys().zip(other.keys()).all(|(a, b)| a == b)
    }
}

impl Eq for MenuGroup {}

impl fmt::Display for MenuGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl FromIterator<MenuItem> for MenuGroup {
    fn from_iter<T: IntoIterator<Item = MenuItem>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

//! Domain Entities
//!
//! - `MenuItem` - a named command
//! - `MenuGroup` - an ordered block of items
//! - `Menu` - groups plus numbering and separator settings

mod menu;
mod menu_group;
mod menu_item;

pub use menu::Menu;
pub use menu_group::MenuGroup;
pub use menu_item::MenuItem;

//! Domain Layer
//!
//! The menu model without any I/O.
//!
//! ## Structure
//!
//! - `entities/` - Menu, MenuGroup, MenuItem
//! - `value_objects/` - IndexFormat, MenuOptions
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! Process spawning and file access only happen behind the traits in `ports/`.

pub mod entities;
pub mod ports;
pub mod value_objects;

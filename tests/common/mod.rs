//! Common test utilities for srm CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp config directory
//! - Assertion macros: `assert_menu_eq!`, `assert_stderr_contains!`
//! - Fixtures: Reusable config content constants

pub mod assertions;
pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;

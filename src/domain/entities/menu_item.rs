//! MenuItem entity - a labelled command

use std::fmt;

/// A named shell command shown as one menu line.
///
/// Equality compares both name and command.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MenuItem {
    /// Display label and lookup key
    name: String,
    /// Shell command line, not validated
    command: String,
}

impl MenuItem {
    /// Create a new MenuItem, converting both fields to text
    pub fn new(name: impl ToString, command: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Split into `(name, command)`
    pub fn into_parts(self) -> (String, String) {
        (self.name, self.command)
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

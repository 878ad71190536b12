//! Menu rendering and numbering options.

use super::index_format::IndexFormat;

/// Separator line placed between groups when none is configured.
pub const DEFAULT_SEPARATOR: &str = "---";

/// Numbering and layout settings for a [`Menu`](crate::domain::entities::Menu).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOptions {
    /// Rewrite item keys with a running index when groups are added
    pub numbered: bool,
    /// First index handed out
    pub index_start: i64,
    /// Template producing the numbered key
    pub index_format: IndexFormat,
    /// Line rendered between two groups
    pub separator: String,
}

impl MenuOptions {
    pub fn numbered(mut self, numbered: bool) -> Self {
        self.numbered = numbered;
        self
    }

    pub fn index_start(mut self, index_start: i64) -> Self {
        self.index_start = index_start;
        self
    }

    pub fn index_format(mut self, index_format: IndexFormat) -> Self {
        self.index_format = index_format;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            numbered: false,
            index_start: 0,
            index_format: IndexFormat::default(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

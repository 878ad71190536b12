//! Index Format Value Object
//!
//! Template used to rewrite item keys when a menu is numbered. The template
//! knows two placeholders, `{item_index}` and `{item_name}`, each with an
//! optional padding spec such as `{item_index:>2}`; literal braces are written
//! `{{` and `}}`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, SrmResult};

use super::format_spec::FormatSpec;

/// Default template: index, a space, then the item name.
pub const DEFAULT_INDEX_FORMAT: &str = "{item_index} {item_name}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Index(FormatSpec),
    Name(FormatSpec),
}

/// A validated numbering template.
///
/// Two formats are equal when their source text is equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IndexFormat {
    raw: String,
    segments: Vec<Segment>,
}

impl IndexFormat {
    /// Parse a template, rejecting unknown placeholders and unbalanced braces.
    pub fn new(raw: impl Into<String>) -> SrmResult<Self> {
        let raw = raw.into();
        let segments = parse(&raw).map_err(|message| MenuError::InvalidIndexFormat {
            format: raw.clone(),
            message,
        })?;
        Ok(Self { raw, segments })
    }

    /// The template as written in the configuration.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Substitute an index and a name into the template.
    pub fn render(&self, item_index: i128, item_name: &str) -> String {
        let mut out = String::with_capacity(self.raw.len() + item_name.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Index(spec) => out.push_str(&spec.render_index(item_index)),
                Segment::Name(spec) => out.push_str(&spec.render_name(item_name)),
            }
        }
        out
    }
}

fn parse(raw: &str) -> Result<Vec<Segment>, String> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => return Err("'{' inside a placeholder".to_string()),
                        Some(ch) => field.push(ch),
                        None => return Err("unterminated '{'".to_string()),
                    }
                }
                let (name, spec) = field.split_once(':').unwrap_or((field.as_str(), ""));
                let segment = match name {
                    "item_index" => Segment::Index(FormatSpec::parse_index(spec)?),
                    "item_name" => Segment::Name(FormatSpec::parse_name(spec)?),
                    other => {
                        return Err(format!(
                            "unknown placeholder '{{{other}}}' (expected {{item_index}} or {{item_name}})"
                        ))
                    }
                };
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                literal.push('}');
            }
            '}' => return Err("single '}' outside a placeholder".to_string()),
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

impl Default for IndexFormat {
    fn default() -> Self {
        Self {
            raw: DEFAULT_INDEX_FORMAT.to_string(),
            segments: vec![
                Segment::Index(FormatSpec::default()),
                Segment::Literal(" ".to_string()),
                Segment::Name(FormatSpec::default()),
            ],
        }
    }
}

impl PartialEq for IndexFormat {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for IndexFormat {}

impl fmt::Display for IndexFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl TryFrom<String> for IndexFormat {
    type Error = MenuError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl TryFrom<&str> for IndexFormat {
    type Error = MenuError;

    fn try_from(raw: &str) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<IndexFormat> for String {
    fn from(format: IndexFormat) -> Self {
        format.raw
    }
}

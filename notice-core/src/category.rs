//! The closed set of message categories.
//!
//! Declaration order is display order: errors first, then warnings,
//! informational notes and finally per-field validation messages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoticeError;

/// Severity/class of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Error,
    Warn,
    Info,
    Validation,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Error,
        Category::Warn,
        Category::Info,
        Category::Validation,
    ];

    /// Number of categories.
    pub const COUNT: usize = Self::ALL.len();

    /// Parses an exact category name (`error`, `warn`, `info`, `validation`).
    ///
    /// Matching is case-sensitive and does not trim.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "error" => Some(Category::Error),
            "warn" => Some(Category::Warn),
            "info" => Some(Category::Info),
            "validation" => Some(Category::Validation),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Error => "error",
            Category::Warn => "warn",
            Category::Info => "info",
            Category::Validation => "validation",
        }
    }

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this category starts out keyed by field name, and whether an
    /// empty message for a field removes that field's message.
    pub const fn is_field_keyed(self) -> bool {
        matches!(self, Category::Validation)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = NoticeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::parse(s).ok_or_else(|| NoticeError::InvalidCategory(s.to_string()))
    }
}

/// Returns true iff `name` is one of the declared category names.
pub fn is_category_valid(name: &str) -> bool {
    Category::parse(name).is_some()
}

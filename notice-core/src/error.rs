use std::fmt::{self, Display, Formatter};
use thiserror::Error;

use crate::category::Category;

#[derive(Error, Debug)]
pub enum NoticeError {
    InvalidCategory(String),
    EmptyMessage(Category),
    CategoryFull { category: Category, limit: usize },
    MessageTooLong { category: Category, length: usize, limit: usize },
    Config(String),
    Io(#[from] std::io::Error),
    Serialization(String),
}

impl Display for NoticeError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            NoticeError::InvalidCategory(name) => {
                write!(f, "Unknown message category: '{}'", name)?;
                write!(f, " (expected one of: error, warn, info, validation)")
            }
            NoticeError::EmptyMessage(category) => {
                write!(f, "Refusing to store an empty {} message", category)
            }
            NoticeError::CategoryFull { category, limit } => write!(
                f,
                "Category '{}' already holds the maximum of {} messages",
                category, limit
            ),
            NoticeError::MessageTooLong {
                category,
                length,
                limit,
            } => write!(
                f,
                "{} message is {} characters long (limit: {})",
                category, length, limit
            ),
            NoticeError::Config(s) => write!(f, "Configuration error: {}", s),
            NoticeError::Io(e) => write!(f, "I/O error: {}", e),
            NoticeError::Serialization(s) => write!(f, "Serialization error: {}", s),
        }
    }
}

impl NoticeError {
    /// Short machine-friendly name of the rejection, used as a log field.
    pub fn reason(&self) -> &'static str {
        match self {
            NoticeError::InvalidCategory(_) => "invalid_category",
            NoticeError::EmptyMessage(_) => "empty_message",
            NoticeError::CategoryFull { .. } => "category_full",
            NoticeError::MessageTooLong { .. } => "message_too_long",
            NoticeError::Config(_) => "config",
            NoticeError::Io(_) => "io",
            NoticeError::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_yaml_ng::Error> for NoticeError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        NoticeError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for NoticeError {
    fn from(err: serde_json::Error) -> Self {
        NoticeError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NoticeError>;

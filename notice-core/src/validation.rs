//! Normalization of caller input before it reaches the store.
//!
//! Message text and field names are trimmed; text that is blank after
//! trimming is never stored. Only a missing or empty field name means
//! "no field".

use crate::category::Category;
use crate::error::{NoticeError, Result};

/// Trims `message`, returning `None` when nothing remains.
pub fn normalize_message(message: &str) -> Option<&str> {
    non_blank(message)
}

/// Trims a field name. A missing or empty field means "no field"; a
/// whitespace-only name is kept as-is since it is still a key.
pub fn normalize_field(field: Option<&str>) -> Option<&str> {
    match field {
        None | Some("") => None,
        Some(name) => Some(non_blank(name).unwrap_or(name)),
    }
}

fn non_blank(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// Checks an already-trimmed message against an optional length limit,
/// counted in characters.
pub fn check_message_length(category: Category, message: &str, limit: Option<usize>) -> Result<()> {
    let Some(limit) = limit else {
        return Ok(());
    };

    let length = message.chars().count();
    if length > limit {
        return Err(NoticeError::MessageTooLong {
            category,
            length,
            limit,
        });
    }

    Ok(())
}

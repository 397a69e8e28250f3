//! notice-core
//!
//! Foundation types shared by the notice registry crates: the closed set of
//! message categories, the error type, and the trimming rules applied to
//! message text and field names before anything is stored.

pub mod category;
pub mod error;
pub mod validation;

pub use category::{is_category_valid, Category};
pub use error::{NoticeError, Result};

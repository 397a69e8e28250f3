//! notice-messages
//!
//! Collects user-facing status messages while a request is processed so any
//! part of the code can report a problem, and a presentation layer can later
//! render everything grouped by category.
//!
//! ```rust
//! use notice_messages::MessageRegistry;
//!
//! let mut messages = MessageRegistry::new();
//! assert!(messages.add("error", "Could not save your profile.", None));
//! assert!(messages.add("validation", "Required", Some("email")));
//! assert!(!messages.add("bogus", "ignored", None));
//!
//! let errors = messages.get("error").into_collection().unwrap();
//! assert_eq!(errors.as_sequence().unwrap(), ["Could not save your profile."]);
//! ```
//!
//! A [`MessageRegistry`] is a plain value: construct one per request and pass
//! it to whatever needs it. [`SharedRegistry`] wraps one behind a lock for
//! code that has to share a single registry across threads.

pub mod collection;
pub mod registry;
pub mod shared;
pub mod store;

pub use collection::{FieldMessages, MessageCollection};
pub use notice_config::RegistryConfig;
pub use notice_core::{is_category_valid, Category, NoticeError};
pub use registry::{AddOutcome, MessageRegistry, Retrieved};
pub use shared::SharedRegistry;
pub use store::MessageStore;

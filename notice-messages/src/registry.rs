//! The message registry.
//!
//! `add` and `get` keep a forgiving contract: `add` reports rejection through
//! its boolean result and `get` never fails, degrading to an empty collection
//! for unknown categories. `try_add` and `record` expose the reason a message
//! was rejected for callers that care.

use std::mem;

use notice_config::RegistryConfig;
use notice_core::error::{NoticeError, Result};
use notice_core::validation::{check_message_length, normalize_field, normalize_message};
use notice_core::Category;
use serde::Serialize;
use tracing::{debug, trace};

use crate::collection::MessageCollection;
use crate::store::MessageStore;

/// What a successful `add` did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The message was appended to the category's ordered messages.
    Appended,
    /// The field's message was set, replacing the previous one if any.
    FieldSet { replaced: Option<String> },
    /// The field's message was removed. `removed` is `None` when the field
    /// had no message to begin with.
    FieldCleared { removed: Option<String> },
}

/// Result of [`MessageRegistry::get`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Retrieved {
    /// Every category, returned for a blank category name.
    All(MessageStore),
    /// One category's collection; empty for unknown category names.
    One(MessageCollection),
}

impl Retrieved {
    pub fn into_collection(self) -> Option<MessageCollection> {
        match self {
            Retrieved::One(collection) => Some(collection),
            Retrieved::All(_) => None,
        }
    }

    pub fn into_store(self) -> Option<MessageStore> {
        match self {
            Retrieved::All(store) => Some(store),
            Retrieved::One(_) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Retrieved::All(store) => store.is_empty(),
            Retrieved::One(collection) => collection.is_empty(),
        }
    }
}

/// Pending user-facing messages, grouped by [`Category`].
#[derive(Debug, Clone, Default)]
pub struct MessageRegistry {
    store: MessageStore,
    config: RegistryConfig,
}

impl MessageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            store: MessageStore::default(),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Records a message, returning whether the request was honored.
    ///
    /// With a non-empty `field` the message is stored under that field,
    /// replacing any earlier one; this makes the category field-keyed. For
    /// `validation`, an empty or whitespace-only `message` together with a
    /// field removes that field's message and still reports success.
    pub fn add(&mut self, category: &str, message: &str, field: Option<&str>) -> bool {
        match self.try_add(category, message, field) {
            Ok(_) => true,
            Err(e) => {
                debug!(category, reason = e.reason(), error = %e, "Message rejected");
                false
            }
        }
    }

    /// Like [`add`](Self::add), but reports why a message was rejected.
    pub fn try_add(&mut self, category: &str, message: &str, field: Option<&str>) -> Result<AddOutcome> {
        let category: Category = category.parse()?;
        self.record(category, message, field)
    }

    /// Records a message under an already-parsed category.
    pub fn record(&mut self, category: Category, message: &str, field: Option<&str>) -> Result<AddOutcome> {
        match (normalize_message(message), normalize_field(field)) {
            (Some(text), Some(field)) => self.set_field(category, field, text),
            (Some(text), None) => self.append(category, text),
            (None, Some(field)) if category.is_field_keyed() => {
                Ok(self.clear_field(category, field))
            }
            (None, _) => Err(NoticeError::EmptyMessage(category)),
        }
    }

    fn append(&mut self, category: Category, text: &str) -> Result<AddOutcome> {
        check_message_length(category, text, self.config.max_message_length)?;
        self.check_capacity(category)?;

        self.store.get_mut(category).push(text.to_string());
        trace!(%category, message = text, "Message added");
        Ok(AddOutcome::Appended)
    }

    fn set_field(&mut self, category: Category, field: &str, text: &str) -> Result<AddOutcome> {
        check_message_length(category, text, self.config.max_message_length)?;

        // Replacing an existing field does not grow the collection.
        let is_new_field = self
            .store
            .get(category)
            .as_field_map()
            .map_or(true, |fields| !fields.contains_field(field));
        if is_new_field {
            self.check_capacity(category)?;
        }

        let fields = self.store.get_mut(category).keyed_mut();
        let replaced = fields.set(field.to_string(), text.to_string());
        trace!(%category, field, message = text, replaced = replaced.is_some(), "Field message set");
        Ok(AddOutcome::FieldSet { replaced })
    }

    fn clear_field(&mut self, category: Category, field: &str) -> AddOutcome {
        let removed = match self.store.get_mut(category) {
            MessageCollection::FieldMap(fields) => fields.remove(field),
            MessageCollection::Sequence(_) => None,
        };
        trace!(%category, field, existed = removed.is_some(), "Field message cleared");
        AddOutcome::FieldCleared { removed }
    }

    fn check_capacity(&self, category: Category) -> Result<()> {
        match self.config.max_messages_per_category {
            Some(limit) if self.store.get(category).len() >= limit => {
                Err(NoticeError::CategoryFull { category, limit })
            }
            _ => Ok(()),
        }
    }

    /// Looks up messages by category name.
    ///
    /// A blank name returns every category in display order. An unknown name
    /// returns an empty collection.
    pub fn get(&self, category: &str) -> Retrieved {
        if category.trim().is_empty() {
            return Retrieved::All(self.snapshot());
        }

        match Category::parse(category) {
            Some(category) => Retrieved::One(self.collection(category).clone()),
            None => {
                trace!(category, "Lookup of unknown message category");
                Retrieved::One(MessageCollection::default())
            }
        }
    }

    pub fn collection(&self, category: Category) -> &MessageCollection {
        self.store.get(category)
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Owned copy of every category's messages.
    pub fn snapshot(&self) -> MessageStore {
        self.store.clone()
    }

    /// Total number of pending messages.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Drops every pending message. All categories remain present.
    pub fn clear(&mut self) {
        let count = self.store.len();
        self.store.clear();
        debug!(count, "Message registry cleared");
    }

    /// Returns every pending message and leaves the registry empty.
    pub fn take(&mut self) -> MessageStore {
        let store = mem::take(&mut self.store);
        debug!(count = store.len(), "Message registry drained");
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(registry: &MessageRegistry, category: Category) -> Vec<String> {
        registry
            .collection(category)
            .as_sequence()
            .expect("sequence category")
            .to_vec()
    }

    #[test]
    fn test_add_appends_trimmed_message() {
        let mut registry = MessageRegistry::new();
        assert!(registry.add("info", "  Profile saved.  ", None));
        assert_eq!(sequence(&registry, Category::Info), vec!["Profile saved."]);
    }

    #[test]
    fn test_add_rejects_unknown_category() {
        let mut registry = MessageRegistry::new();
        assert!(!registry.add("bogus", "anything", None));
        assert!(!registry.add("MSG_TYPE_ERROR", "anything", None));
        assert!(!registry.add("", "anything", None));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_try_add_reports_reason() {
        let mut registry = MessageRegistry::new();

        let err = registry.try_add("bogus", "x", None).unwrap_err();
        assert!(matches!(err, NoticeError::InvalidCategory(_)));

        let err = registry.try_add("warn", "   ", None).unwrap_err();
        assert!(matches!(err, NoticeError::EmptyMessage(Category::Warn)));

        // Only validation treats an empty message for a field as a removal.
        let err = registry.try_add("error", "", Some("name")).unwrap_err();
        assert!(matches!(err, NoticeError::EmptyMessage(Category::Error)));
    }

    #[test]
    fn test_empty_field_means_no_field() {
        let mut registry = MessageRegistry::new();
        assert_eq!(
            registry.try_add("error", "Oops", Some("")).unwrap(),
            AddOutcome::Appended
        );
        assert_eq!(sequence(&registry, Category::Error), vec!["Oops"]);
    }

    #[test]
    fn test_field_on_sequence_category_is_stored_by_key() {
        let mut registry = MessageRegistry::new();
        assert!(registry.add("error", "Could not save", None));

        let outcome = registry.try_add("error", " Bad value ", Some("name")).unwrap();
        assert_eq!(outcome, AddOutcome::FieldSet { replaced: None });
        assert!(registry.add("error", "Out of range", Some("name")));

        let fields = registry
            .collection(Category::Error)
            .as_field_map()
            .expect("field-keyed after a field was used");
        assert_eq!(fields.general(), ["Could not save"]);
        assert_eq!(fields.get("name"), Some("Out of range"));
        assert_eq!(fields.field_count(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_whitespace_field_is_a_real_key() {
        let mut registry = MessageRegistry::new();
        assert!(registry.add("validation", "Required", Some("  ")));
        assert_eq!(
            registry
                .collection(Category::Validation)
                .as_field_map()
                .unwrap()
                .get("  "),
            Some("Required")
        );

        let outcome = registry.try_add("validation", "", Some("  ")).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::FieldCleared {
                removed: Some("Required".to_string())
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_capacity_rejection_keeps_sequence_shape() {
        let mut registry = MessageRegistry::with_config(RegistryConfig {
            max_messages_per_category: Some(1),
            max_message_length: None,
        });

        assert!(registry.add("warn", "one", None));
        assert!(!registry.add("warn", "two", Some("name")));
        assert_eq!(sequence(&registry, Category::Warn), vec!["one"]);
    }

    #[test]
    fn test_field_outcomes() {
        let mut registry = MessageRegistry::new();

        let outcome = registry.record(Category::Validation, "Too short", Some("name")).unwrap();
        assert_eq!(outcome, AddOutcome::FieldSet { replaced: None });

        let outcome = registry.record(Category::Validation, "Required", Some("name")).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::FieldSet {
                replaced: Some("Too short".to_string())
            }
        );

        let outcome = registry.record(Category::Validation, "", Some("name")).unwrap();
        assert_eq!(
            outcome,
            AddOutcome::FieldCleared {
                removed: Some("Required".to_string())
            }
        );

        let outcome = registry.record(Category::Validation, " ", Some("name")).unwrap();
        assert_eq!(outcome, AddOutcome::FieldCleared { removed: None });
    }

    #[test]
    fn test_field_names_are_trimmed() {
        let mut registry = MessageRegistry::new();
        assert!(registry.add("validation", "Required", Some(" email ")));

        let fields = registry
            .collection(Category::Validation)
            .as_field_map()
            .unwrap();
        assert_eq!(fields.get("email"), Some("Required"));
        assert!(!fields.contains_field(" email "));
    }

    #[test]
    fn test_validation_without_field_is_form_level() {
        let mut registry = MessageRegistry::new();
        assert!(registry.add("validation", "Please correct the errors below", None));

        let fields = registry
            .collection(Category::Validation)
            .as_field_map()
            .unwrap();
        assert_eq!(fields.general(), ["Please correct the errors below"]);
        assert_eq!(fields.field_count(), 0);
    }

    #[test]
    fn test_capacity_limit() {
        let mut registry = MessageRegistry::with_config(RegistryConfig {
            max_messages_per_category: Some(2),
            max_message_length: None,
        });

        assert!(registry.add("warn", "one", None));
        assert!(registry.add("warn", "two", None));
        let err = registry.try_add("warn", "three", None).unwrap_err();
        assert!(matches!(err, NoticeError::CategoryFull { limit: 2, .. }));
        assert_eq!(sequence(&registry, Category::Warn), vec!["one", "two"]);

        // Other categories have their own budget.
        assert!(registry.add("info", "three", None));
    }

    #[test]
    fn test_capacity_allows_field_overwrite() {
        let mut registry = MessageRegistry::with_config(RegistryConfig {
            max_messages_per_category: Some(1),
            max_message_length: None,
        });

        assert!(registry.add("validation", "Too short", Some("name")));
        assert!(!registry.add("validation", "Required", Some("email")));
        assert!(registry.add("validation", "Required", Some("name")));

        let fields = registry
            .collection(Category::Validation)
            .as_field_map()
            .unwrap();
        assert_eq!(fields.get("name"), Some("Required"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_message_length_limit_applies_after_trim() {
        let mut registry = MessageRegistry::with_config(RegistryConfig {
            max_messages_per_category: None,
            max_message_length: Some(4),
        });

        assert!(registry.add("error", "  abcd  ", None));
        assert!(!registry.add("error", "abcde", None));
        assert!(!registry.add("validation", "abcde", Some("name")));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown_category_is_empty() {
        let registry = MessageRegistry::new();
        let retrieved = registry.get("bogus");
        assert!(retrieved.is_empty());
        assert_eq!(
            retrieved.into_collection(),
            Some(MessageCollection::default())
        );
    }

    #[test]
    fn test_get_blank_returns_all() {
        let mut registry = MessageRegistry::new();
        registry.add("error", "a", None);

        let store = registry.get("  ").into_store().unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store, registry.snapshot());
    }

    #[test]
    fn test_take_drains_and_clear_empties() {
        let mut registry = MessageRegistry::new();
        registry.add("error", "a", None);
        registry.add("validation", "Required", Some("name"));

        let drained = registry.take();
        assert_eq!(drained.len(), 2);
        assert!(registry.is_empty());
        assert!(registry
            .collection(Category::Validation)
            .as_field_map()
            .is_some());

        registry.add("info", "b", None);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.store().iter().count(), Category::COUNT);
    }
}

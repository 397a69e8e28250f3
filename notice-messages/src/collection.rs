//! Per-category message collections.
//!
//! Error, warning and info messages start as plain append-ordered sequences.
//! Validation messages are keyed by field name, with at most one message per
//! field, plus an ordered list of form-level messages that name no field.
//! A sequence becomes field-keyed the first time a message names a field;
//! its earlier messages move to the form-level list in order.

use std::mem;

use indexmap::IndexMap;
use notice_core::Category;
use serde::{Deserialize, Serialize};

/// Messages of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageCollection {
    Sequence(Vec<String>),
    FieldMap(FieldMessages),
}

/// The empty collection returned for an unknown category name. Use
/// [`MessageCollection::empty_for`] for a known category's starting shape.
impl Default for MessageCollection {
    fn default() -> Self {
        MessageCollection::Sequence(Vec::new())
    }
}

impl MessageCollection {
    /// Empty collection with the shape `category` uses.
    pub fn empty_for(category: Category) -> Self {
        if category.is_field_keyed() {
            MessageCollection::FieldMap(FieldMessages::default())
        } else {
            MessageCollection::Sequence(Vec::new())
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MessageCollection::Sequence(messages) => messages.len(),
            MessageCollection::FieldMap(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            MessageCollection::Sequence(messages) => Some(messages),
            MessageCollection::FieldMap(_) => None,
        }
    }

    pub fn as_field_map(&self) -> Option<&FieldMessages> {
        match self {
            MessageCollection::FieldMap(fields) => Some(fields),
            MessageCollection::Sequence(_) => None,
        }
    }

    /// All message text in display order. For field maps, form-level
    /// messages come first, then field messages in the order the fields were
    /// first reported.
    pub fn messages(&self) -> Vec<&str> {
        match self {
            MessageCollection::Sequence(messages) => messages.iter().map(String::as_str).collect(),
            MessageCollection::FieldMap(fields) => fields
                .general()
                .iter()
                .map(String::as_str)
                .chain(fields.fields().map(|(_, message)| message))
                .collect(),
        }
    }

    pub(crate) fn push(&mut self, message: String) {
        match self {
            MessageCollection::Sequence(messages) => messages.push(message),
            MessageCollection::FieldMap(fields) => fields.general.push(message),
        }
    }

    /// Field-keyed view of this collection, converting a sequence first.
    pub(crate) fn keyed_mut(&mut self) -> &mut FieldMessages {
        if let MessageCollection::Sequence(messages) = self {
            let general = mem::take(messages);
            *self = MessageCollection::FieldMap(FieldMessages {
                general,
                fields: IndexMap::new(),
            });
        }

        match self {
            MessageCollection::FieldMap(fields) => fields,
            MessageCollection::Sequence(_) => unreachable!("sequence converted above"),
        }
    }
}

/// Field-keyed messages: one per field, plus form-level messages that name
/// no field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMessages {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    general: Vec<String>,

    #[serde(default)]
    fields: IndexMap<String, String>,
}

impl FieldMessages {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// `(field, message)` pairs in the order the fields were first reported.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    /// Messages recorded without a field.
    pub fn general(&self) -> &[String] {
        &self.general
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn len(&self) -> usize {
        self.general.len() + self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sets the message for `field`, returning the message it replaced.
    /// A replaced field keeps its original position.
    pub(crate) fn set(&mut self, field: String, message: String) -> Option<String> {
        self.fields.insert(field, message)
    }

    pub(crate) fn remove(&mut self, field: &str) -> Option<String> {
        self.fields.shift_remove(field)
    }
}

//! The category → collection store.
//!
//! Holds one collection per category for the store's whole life; the array
//! is indexed by [`Category::index`], so no category can be missing.

use notice_core::{Category, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::collection::MessageCollection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageStore {
    collections: [MessageCollection; Category::COUNT],
}

impl Default for MessageStore {
    fn default() -> Self {
        Self {
            collections: Category::ALL.map(MessageCollection::empty_for),
        }
    }
}

impl MessageStore {
    pub fn get(&self, category: Category) -> &MessageCollection {
        &self.collections[category.index()]
    }

    pub(crate) fn get_mut(&mut self, category: Category) -> &mut MessageCollection {
        &mut self.collections[category.index()]
    }

    /// Every category with its collection, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &MessageCollection)> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of messages across all categories.
    pub fn len(&self) -> usize {
        self.collections.iter().map(MessageCollection::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.iter().all(MessageCollection::is_empty)
    }

    /// Empties every category and restores its starting shape.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }

    /// JSON object keyed by category name, in display order.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for MessageStore {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(Category::COUNT))?;
        for (category, collection) in self.iter() {
            map.serialize_entry(category.as_str(), collection)?;
        }
        map.end()
    }
}

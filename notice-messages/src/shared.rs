//! A registry shared between threads.
//!
//! Every operation takes the lock for its whole duration. Sharing one
//! registry across requests leaks messages between them unless the caller
//! clears it when a request starts, or drains it with [`SharedRegistry::take`]
//! when the response is rendered.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use notice_config::RegistryConfig;
use notice_core::{Category, Result};

use crate::collection::MessageCollection;
use crate::registry::{AddOutcome, MessageRegistry, Retrieved};
use crate::store::MessageStore;

#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<MessageRegistry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from(MessageRegistry::with_config(config))
    }

    // The registry holds only plain data, so a panic while the lock was held
    // cannot leave it half-updated.
    fn lock(&self) -> MutexGuard<'_, MessageRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add(&self, category: &str, message: &str, field: Option<&str>) -> bool {
        self.lock().add(category, message, field)
    }

    pub fn try_add(&self, category: &str, message: &str, field: Option<&str>) -> Result<AddOutcome> {
        self.lock().try_add(category, message, field)
    }

    pub fn record(&self, category: Category, message: &str, field: Option<&str>) -> Result<AddOutcome> {
        self.lock().record(category, message, field)
    }

    pub fn get(&self, category: &str) -> Retrieved {
        self.lock().get(category)
    }

    pub fn collection(&self, category: Category) -> MessageCollection {
        self.lock().collection(category).clone()
    }

    pub fn snapshot(&self) -> MessageStore {
        self.lock().snapshot()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn take(&self) -> MessageStore {
        self.lock().take()
    }
}

impl From<MessageRegistry> for SharedRegistry {
    fn from(registry: MessageRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}

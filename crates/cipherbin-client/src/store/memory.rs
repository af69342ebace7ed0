//! In-memory delete-on-read store for tests and simulation.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;

use super::MessageStore;
use crate::{error::StoreError, message::Message};

/// In-memory store with delete-on-read semantics.
///
/// Records are keyed by identifier and removed on the first successful
/// `get`; a second fetch of the same identifier is [`StoreError::NotFound`],
/// exactly like the real service. State is shared across clones via
/// `Arc<Mutex<..>>`; `lock().expect()` panics if the mutex is poisoned,
/// acceptable for test code.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Arc<Mutex<HashMap<String, Message>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    pub fn len(&self) -> usize {
        self.records.lock().expect("Mutex poisoned").len()
    }

    /// True when no records are held.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Extract the identifier from a link-shaped url, `..bin={id};{key}`.
fn identifier_of(url: &str) -> Option<&str> {
    let (_, payload) = url.split_once("bin=")?;
    let (id, _) = payload.split_once(';')?;
    (!id.is_empty()).then_some(id)
}

#[async_trait]
impl MessageStore for MemoryStore {
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    async fn put(&self, message: &Message) -> Result<(), StoreError> {
        self.records
            .lock()
            .expect("Mutex poisoned")
            .insert(message.uuid.clone(), message.clone());

        Ok(())
    }

    /// Removes the record on success: the read-once contract.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned. This is acceptable for test
    /// code.
    #[allow(clippy::expect_used)]
    async fn get(&self, url: &str) -> Result<Message, StoreError> {
        let id = identifier_of(url).ok_or(StoreError::NotFound)?;

        self.records.lock().expect("Mutex poisoned").remove(id).ok_or(StoreError::NotFound)
    }
}

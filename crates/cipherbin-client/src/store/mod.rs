//! Storage abstraction for sealed messages.
//!
//! The external contract is delete-on-read: the first successful `get` for
//! an identifier is also the last. Implementations hold ciphertext only;
//! key material never reaches a store.

#[cfg(feature = "http")]
mod http;
mod memory;

use async_trait::async_trait;
#[cfg(feature = "http")]
pub use http::HttpStore;
pub use memory::MemoryStore;

use crate::{error::StoreError, message::Message};

/// A remote store of sealed messages with delete-on-read semantics.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Store a sealed message under its identifier.
    async fn put(&self, message: &Message) -> Result<(), StoreError>;

    /// Fetch a sealed message by its API-base link.
    ///
    /// The wire contract takes the full link rather than a bare identifier;
    /// the server extracts the identifier and deletes the record on a
    /// successful read. Implementations MUST map every "record absent"
    /// outcome to [`StoreError::NotFound`] without distinguishing why.
    async fn get(&self, url: &str) -> Result<Message, StoreError>;
}

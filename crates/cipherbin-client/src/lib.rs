//! Cipherbin Client
//!
//! One-time message lifecycle over an injected store. `create` seals a
//! plaintext under a fresh key and yields the only link that can ever
//! decrypt it; `read` follows such a link, fetches the ciphertext
//! (destroying it server-side) and opens it locally.
//!
//! # Components
//!
//! - [`Messenger`]: create/read orchestration over a store and a [`Config`]
//! - [`MessageStore`]: store abstraction with delete-on-read semantics
//! - [`MemoryStore`]: in-memory store for tests and simulation
//! - [`HttpStore`] (feature `http`): client for the cipherbin HTTP API
//!
//! # Store semantics
//!
//! The store holds ciphertext only, keyed by identifier; the decryption key
//! travels exclusively inside the link. A record is deleted on its first
//! successful read, and every flavor of "gone" (never existed, already
//! viewed, expired) surfaces as the single
//! [`ClientError::NotFoundOrConsumed`] case.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod error;
mod lifecycle;
mod message;
mod store;

pub use cipherbin_crypto::CryptoError;
pub use cipherbin_link::LinkError;
pub use config::Config;
pub use error::{ClientError, StoreError};
pub use lifecycle::{CreatedMessage, Messenger};
pub use message::{Message, MessageMetadata};
#[cfg(feature = "http")]
pub use store::HttpStore;
pub use store::{MemoryStore, MessageStore};

//! Error types for the message lifecycle and stores.
//!
//! Strongly-typed errors per layer: store errors describe transport and
//! record outcomes, client errors describe the lifecycle's contract with its
//! caller. Nothing is swallowed; every failure aborts the operation that
//! raised it.

use cipherbin_crypto::CryptoError;
use cipherbin_link::LinkError;
use thiserror::Error;

/// Errors from a message store implementation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The record is absent: never existed, already read, or expired.
    ///
    /// Implementations MUST NOT distinguish these cases.
    #[error("message not found")]
    NotFound,

    /// Transport-level failure reaching the store.
    #[error("transport error: {reason}")]
    Transport {
        /// Description of the transport failure
        reason: String,
    },

    /// The store understood the request and refused it.
    #[error("store rejected request with status {status}")]
    Rejected {
        /// HTTP status code returned
        status: u16,
    },
}

/// Errors surfaced by the message lifecycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Key generation, sealing or opening failed.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The link is structurally invalid; raised before any network call.
    #[error(transparent)]
    Link(#[from] LinkError),

    /// The message is unavailable: already viewed and destroyed, expired,
    /// or never existed. Deliberately a single case: the client cannot and
    /// must not tell which.
    #[error("message has already been viewed and destroyed, or never existed")]
    NotFoundOrConsumed,

    /// The store failed on put or get.
    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ClientError {
    /// Collapse store-level absence into the single consumed-or-missing case.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFoundOrConsumed,
            other => Self::Store(other),
        }
    }
}

//! End-to-end message lifecycle.
//!
//! Sender path: identifier → key → seal → store → link. Reader path:
//! decode → fetch (the store deletes on read) → open. Each operation is
//! call-scoped: no shared state between invocations, no caching of key
//! material or plaintext, and never an automatic fetch retry: against a
//! delete-on-read store a retry could consume someone else's single
//! legitimate read.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use cipherbin_crypto::{CryptoError, Key, open, seal};
use cipherbin_link::{MessageId, codec};

use crate::{
    config::Config,
    error::ClientError,
    message::{Message, MessageMetadata},
    store::MessageStore,
};

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedMessage {
    /// Identifier the ciphertext is stored under
    pub id: MessageId,
    /// Browser-facing one-time link; the only copy of the key
    pub url: String,
}

/// Orchestrates the create and read flows over an injected store.
#[derive(Debug, Clone)]
pub struct Messenger<S> {
    store: S,
    config: Config,
}

impl<S: MessageStore> Messenger<S> {
    /// Build a messenger over `store` with explicit base urls.
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Seal `plaintext` under a fresh key, store it, and return the one-time
    /// link.
    ///
    /// The key exists only in the returned link. A failed seal never reaches
    /// the store, and a failed put leaves nothing behind to link to.
    ///
    /// # Errors
    ///
    /// [`ClientError::Crypto`] if key generation or sealing fails;
    /// [`ClientError::Store`] if the store rejects the put.
    pub async fn create(
        &self,
        plaintext: &[u8],
        metadata: MessageMetadata,
    ) -> Result<CreatedMessage, ClientError> {
        let id = MessageId::random();
        let key = Key::generate()?;
        let sealed = seal(plaintext, &key)?;

        let message = Message {
            uuid: id.to_string(),
            message: STANDARD.encode(sealed),
            email: metadata.email,
            reference_name: metadata.reference_name,
            password: metadata.password,
        };

        self.store.put(&message).await.map_err(ClientError::Store)?;
        tracing::debug!(%id, "stored sealed message");

        let url = codec::encode(&self.config.browser_base_url, &id, &key.token());
        Ok(CreatedMessage { id, url })
    }

    /// Fetch and decrypt the message behind `link`.
    ///
    /// The link structure and key token are validated before any network
    /// call: the store deletes on read, so a fetch that could never be
    /// decrypted would still destroy the message.
    ///
    /// # Errors
    ///
    /// [`ClientError::Link`] or [`ClientError::Crypto`] before the fetch;
    /// [`ClientError::NotFoundOrConsumed`] when the record is gone (already
    /// viewed, expired or never existed, indistinguishable);
    /// [`ClientError::Store`] on transport failure. Never retried.
    pub async fn read(&self, link: &str) -> Result<Vec<u8>, ClientError> {
        let decoded = codec::decode(link, &self.config.browser_base_url)?;
        let key = Key::from_token(decoded.key)?;

        let api_url =
            codec::rebase(link, &self.config.browser_base_url, &self.config.api_base_url)?;

        let fetched = self.store.get(&api_url).await?;

        let sealed = STANDARD.decode(fetched.message.as_bytes()).map_err(|_| {
            ClientError::Crypto(CryptoError::DecryptionFailed {
                reason: "stored ciphertext is not valid base64".to_string(),
            })
        })?;

        Ok(open(&sealed, &key)?)
    }
}

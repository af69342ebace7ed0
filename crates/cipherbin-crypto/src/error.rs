//! Error types for the cipherbin cryptographic core.

use thiserror::Error;

/// Errors from key handling and sealing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// The operating system's secure random source was unavailable.
    ///
    /// Fatal for the operation: there is no fallback to a weaker source.
    #[error("secure random source unavailable: {reason}")]
    KeyGeneration {
        /// Description of the underlying randomness failure
        reason: String,
    },

    /// Key token has the wrong length or contains out-of-alphabet bytes.
    ///
    /// Checked before any cryptographic operation is attempted.
    #[error("invalid key: {reason}")]
    InvalidKey {
        /// What was wrong with the token
        reason: String,
    },

    /// Sealed input is malformed or failed the authentication check.
    ///
    /// A wrong key and a tampered ciphertext are reported identically; the
    /// message is not recoverable either way.
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// Failure description
        reason: String,
    },
}

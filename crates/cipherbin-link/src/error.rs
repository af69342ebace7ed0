//! Error types for link decoding.

use thiserror::Error;

/// Structural rejections of a share link.
///
/// Decoding never falls back to best-effort parsing: any link that fails one
/// of these checks is rejected whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// Link does not begin with the expected base url and message path.
    #[error("link does not start with {prefix}")]
    PrefixMismatch {
        /// The prefix the link was validated against
        prefix: String,
    },

    /// The remainder is not exactly two `;`-separated parts.
    #[error("expected exactly two `;`-separated parts, got {parts}")]
    MalformedPayload {
        /// Number of parts found
        parts: usize,
    },

    /// The identifier part is empty.
    #[error("link identifier is empty")]
    EmptyIdentifier,

    /// The key part is empty.
    #[error("link key is empty")]
    EmptyKey,
}

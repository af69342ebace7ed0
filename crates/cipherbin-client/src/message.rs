//! Wire representation of a stored message.

use serde::{Deserialize, Serialize};

/// A message as the storage service sees it.
///
/// The service never receives key material: `message` carries the sealed
/// ciphertext (standard base64 for JSON transport) and the metadata fields
/// pass through untouched by the crypto and link logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier (hyphenated UUID v4)
    pub uuid: String,
    /// Sealed ciphertext, base64-encoded
    pub message: String,
    /// Optional sender contact for read notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Optional human-readable reference name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// Optional access password, enforced server-side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Sender-supplied metadata attached to a message at creation.
///
/// Pass-through only: never interpreted by the crypto or link logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMetadata {
    /// Contact email for read notifications
    pub email: Option<String>,
    /// Human-readable reference name
    pub reference_name: Option<String>,
    /// Access password, enforced server-side
    pub password: Option<String>,
}

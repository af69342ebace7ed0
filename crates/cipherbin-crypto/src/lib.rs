//! Cipherbin Cryptographic Primitives
//!
//! Key generation and authenticated sealing for one-time messages. A message
//! is sealed under a fresh key whose only persistent form is the printable
//! token embedded in the share link; the storage service only ever sees
//! sealed bytes.
//!
//! # Construction
//!
//! ```text
//! OS CSPRNG (33 bytes)
//!        │
//!        ▼
//! Key ── token() ──▶ 44-char url-safe base64, embedded in the link
//!  │
//!  ▼
//! HKDF-SHA256 (fixed label) ──▶ 32-byte cipher key
//!        │
//!        ▼
//! XChaCha20-Poly1305 ──▶ nonce ‖ ciphertext ‖ tag
//! ```
//!
//! The 24-byte nonce is drawn fresh per message and prepended to the
//! ciphertext, so opening needs only the sealed bytes and the key.
//!
//! # Security
//!
//! Single use:
//! - One `generate` per message, never reused across messages
//! - Raw key material is zeroized on drop and never logged
//!
//! Authenticity:
//! - XChaCha20-Poly1305 AEAD provides tamper-proof encryption
//! - Failed authentication tag -> reject message, never garbage plaintext
//! - Wrong key and corrupted ciphertext are reported identically
//!
//! Fail loudly:
//! - An unavailable secure random source aborts key generation; there is no
//!   fallback to a weaker source

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod key;
pub mod seal;

pub use error::CryptoError;
pub use key::{KEY_SIZE, KEY_TOKEN_LEN, Key};
pub use seal::{NONCE_SIZE, TAG_SIZE, open, seal, seal_with_nonce};

//! One-time symmetric keys and their printable link form.
//!
//! A key is [`KEY_SIZE`] bytes drawn from the operating system CSPRNG. Its
//! printable token is url-safe base64 without padding: exactly
//! [`KEY_TOKEN_LEN`] characters from `[A-Za-z0-9_-]`, an alphabet disjoint
//! from the link separators `?`, `=` and `;`, so a token embeds in a link
//! without escaping.

use std::fmt;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use zeroize::Zeroize;

use crate::error::CryptoError;

/// Raw key material size in bytes (264 bits).
pub const KEY_SIZE: usize = 33;

/// Length of the printable key token ([`KEY_SIZE`] bytes, unpadded base64).
pub const KEY_TOKEN_LEN: usize = 44;

/// A one-time symmetric key.
///
/// Generated fresh for every message and used for a single seal or open.
/// Material is zeroized on drop; `Debug` is redacted so the key cannot leak
/// through logging.
#[derive(Clone)]
pub struct Key {
    material: [u8; KEY_SIZE],
}

impl Key {
    /// Generate a fresh key from the operating system's secure random source.
    ///
    /// # Errors
    ///
    /// [`CryptoError::KeyGeneration`] if the source is unavailable. There is
    /// no fallback.
    pub fn generate() -> Result<Self, CryptoError> {
        let mut material = [0u8; KEY_SIZE];
        getrandom::fill(&mut material)
            .map_err(|err| CryptoError::KeyGeneration { reason: err.to_string() })?;

        Ok(Self { material })
    }

    /// Reconstruct a key from its printable token.
    ///
    /// # Errors
    ///
    /// [`CryptoError::InvalidKey`] when the token is not exactly
    /// [`KEY_TOKEN_LEN`] characters of url-safe unpadded base64.
    pub fn from_token(token: &str) -> Result<Self, CryptoError> {
        if token.len() != KEY_TOKEN_LEN {
            return Err(CryptoError::InvalidKey {
                reason: format!("expected {KEY_TOKEN_LEN} characters, got {}", token.len()),
            });
        }

        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| CryptoError::InvalidKey {
            reason: "token is not url-safe base64".to_string(),
        })?;

        let Ok(material) = <[u8; KEY_SIZE]>::try_from(bytes) else {
            unreachable!("{KEY_TOKEN_LEN} unpadded base64 characters decode to {KEY_SIZE} bytes");
        };

        Ok(Self { material })
    }

    /// Printable form of the key as embedded in a link.
    ///
    /// Always [`KEY_TOKEN_LEN`] characters, free of `?`, `=` and `;`.
    pub fn token(&self) -> String {
        URL_SAFE_NO_PAD.encode(self.material)
    }

    /// Raw key material for cipher-key derivation.
    pub(crate) fn material(&self) -> &[u8; KEY_SIZE] {
        &self.material
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        self.material.zeroize();
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_token_is_44_chars() {
        let key = Key::generate().unwrap();
        assert_eq!(key.token().len(), KEY_TOKEN_LEN);
    }

    #[test]
    fn token_avoids_link_separators() {
        for _ in 0..100 {
            let token = Key::generate().unwrap().token();
            assert!(
                token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
                "token {token} leaves the url-safe alphabet"
            );
        }
    }

    #[test]
    fn token_round_trips() {
        let key = Key::generate().unwrap();
        let token = key.token();

        let restored = Key::from_token(&token).unwrap();
        assert_eq!(restored.token(), token);
    }

    #[test]
    fn generated_keys_differ() {
        let a = Key::generate().unwrap();
        let b = Key::generate().unwrap();
        assert_ne!(a.token(), b.token());
    }

    #[test]
    fn short_token_is_rejected() {
        let result = Key::from_token(&"A".repeat(KEY_TOKEN_LEN - 1));
        assert!(matches!(result, Err(CryptoError::InvalidKey { .. })));
    }

    #[test]
    fn long_token_is_rejected() {
        let result = Key::from_token(&"A".repeat(KEY_TOKEN_LEN + 1));
        assert!(matches!(result, Err(CryptoError::InvalidKey { .. })));
    }

    #[test]
    fn empty_token_is_rejected() {
        assert!(matches!(Key::from_token(""), Err(CryptoError::InvalidKey { .. })));
    }

    #[test]
    fn out_of_alphabet_token_is_rejected() {
        // Correct length, but `;` and `=` are not url-safe base64.
        let result = Key::from_token(&";=".repeat(KEY_TOKEN_LEN / 2));
        assert!(matches!(result, Err(CryptoError::InvalidKey { .. })));
    }

    #[test]
    fn debug_is_redacted() {
        let key = Key::generate().unwrap();
        let rendered = format!("{key:?}");
        assert!(!rendered.contains(&key.token()));
    }
}

//! Message sealing using `XChaCha20-Poly1305`.
//!
//! The sealed form is self-contained: a 24-byte nonce followed by the
//! ciphertext and its 16-byte Poly1305 tag. Given only the sealed bytes and
//! the link key, [`open`] recovers the plaintext or fails closed.

use chacha20poly1305::{
    XChaCha20Poly1305, XNonce,
    aead::{Aead, KeyInit},
};
use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::{error::CryptoError, key::Key};

/// Size of the `XChaCha20` nonce prepended to the sealed bytes.
pub const NONCE_SIZE: usize = 24;

/// Poly1305 tag size (16 bytes)
pub const TAG_SIZE: usize = 16;

/// Label pinning the cipher-key derivation to this construction.
const SEAL_KEY_LABEL: &[u8] = b"cipherbinSealV1";

/// Seal a plaintext under `key` with a freshly drawn random nonce.
///
/// # Errors
///
/// [`CryptoError::KeyGeneration`] if the secure random source cannot supply
/// the nonce. There is no fallback.
pub fn seal(plaintext: &[u8], key: &Key) -> Result<Vec<u8>, CryptoError> {
    let mut nonce = [0u8; NONCE_SIZE];
    getrandom::fill(&mut nonce)
        .map_err(|err| CryptoError::KeyGeneration { reason: err.to_string() })?;

    Ok(seal_with_nonce(plaintext, key, nonce))
}

/// Seal a plaintext under `key` with a caller-provided nonce.
///
/// Pure variant for deterministic testing. Callers MUST draw the nonce from
/// a cryptographically secure source in production; [`seal`] does so.
pub fn seal_with_nonce(plaintext: &[u8], key: &Key, nonce: [u8; NONCE_SIZE]) -> Vec<u8> {
    let cipher = seal_cipher(key);

    let Ok(ciphertext) = cipher.encrypt(XNonce::from_slice(&nonce), plaintext) else {
        unreachable!("XChaCha20-Poly1305 encryption cannot fail with valid inputs");
    };

    let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&ciphertext);
    sealed
}

/// Open a sealed message under `key`.
///
/// # Errors
///
/// [`CryptoError::DecryptionFailed`] when the input is too short to contain
/// a nonce and tag, or when the authentication check fails. A wrong key and
/// a corrupted ciphertext are reported identically.
pub fn open(sealed: &[u8], key: &Key) -> Result<Vec<u8>, CryptoError> {
    if sealed.len() < NONCE_SIZE + TAG_SIZE {
        return Err(CryptoError::DecryptionFailed {
            reason: "sealed input too short".to_string(),
        });
    }

    let (nonce, ciphertext) = sealed.split_at(NONCE_SIZE);
    let cipher = seal_cipher(key);

    cipher.decrypt(XNonce::from_slice(nonce), ciphertext).map_err(|_| {
        CryptoError::DecryptionFailed { reason: "authentication failed".to_string() }
    })
}

/// Build the AEAD instance for `key`, zeroizing the derived cipher key.
fn seal_cipher(key: &Key) -> XChaCha20Poly1305 {
    let mut seal_key = derive_seal_key(key);
    let cipher = XChaCha20Poly1305::new((&seal_key).into());
    seal_key.zeroize();
    cipher
}

/// Derive the 32-byte cipher key from the raw link key material.
///
/// HKDF-SHA256 with a fixed version label, following the labeled-derivation
/// convention: the link token bytes are never used as a cipher key directly.
fn derive_seal_key(key: &Key) -> [u8; 32] {
    let hkdf = Hkdf::<Sha256>::new(None, key.material());

    let mut seal_key = [0u8; 32];
    let Ok(()) = hkdf.expand(SEAL_KEY_LABEL, &mut seal_key) else {
        unreachable!("32 bytes is a valid HKDF-SHA256 output length");
    };

    seal_key
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> Key {
        Key::from_token(&"A".repeat(crate::KEY_TOKEN_LEN)).unwrap()
    }

    #[test]
    fn seal_open_roundtrip() {
        let key = test_key();
        let plaintext = b"hello world";

        let sealed = seal(plaintext, &key).unwrap();
        let opened = open(&sealed, &key).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let key = test_key();

        let sealed = seal(b"", &key).unwrap();
        assert_eq!(sealed.len(), NONCE_SIZE + TAG_SIZE);

        let opened = open(&sealed, &key).unwrap();
        assert_eq!(opened, b"");
    }

    #[test]
    fn large_plaintext_roundtrips() {
        let key = test_key();
        let plaintext = vec![0x42u8; 64 * 1024]; // 64KB

        let sealed = seal(&plaintext, &key).unwrap();
        let opened = open(&sealed, &key).unwrap();

        assert_eq!(opened, plaintext);
    }

    #[test]
    fn sealed_length_is_plaintext_plus_overhead() {
        let key = test_key();
        let plaintext = b"test message";

        let sealed = seal(plaintext, &key).unwrap();

        assert_eq!(sealed.len(), plaintext.len() + NONCE_SIZE + TAG_SIZE);
    }

    #[test]
    fn sealing_twice_differs() {
        let key = test_key();
        let plaintext = b"same plaintext";

        let first = seal(plaintext, &key).unwrap();
        let second = seal(plaintext, &key).unwrap();

        // Fresh random nonce per call: both halves must differ.
        assert_ne!(first[..NONCE_SIZE], second[..NONCE_SIZE]);
        assert_ne!(first[NONCE_SIZE..], second[NONCE_SIZE..]);
    }

    #[test]
    fn different_nonces_produce_different_ciphertexts() {
        let key = test_key();
        let plaintext = b"test";

        let first = seal_with_nonce(plaintext, &key, [0x00; NONCE_SIZE]);
        let second = seal_with_nonce(plaintext, &key, [0xFF; NONCE_SIZE]);

        assert_ne!(first, second);
    }

    #[test]
    fn wrong_key_fails_to_open() {
        let key = test_key();
        let other = Key::from_token(&"B".repeat(crate::KEY_TOKEN_LEN)).unwrap();

        let sealed = seal(b"secret message", &key).unwrap();
        let result = open(&sealed, &other);

        assert!(matches!(
            result,
            Err(CryptoError::DecryptionFailed { reason })
                if reason.contains("authentication")
        ));
    }

    #[test]
    fn tampered_ciphertext_fails_to_open() {
        let key = test_key();
        let mut sealed = seal(b"original message", &key).unwrap();

        sealed[NONCE_SIZE] ^= 0xFF;

        assert!(open(&sealed, &key).is_err());
    }

    #[test]
    fn tampered_nonce_fails_to_open() {
        let key = test_key();
        let mut sealed = seal(b"original message", &key).unwrap();

        sealed[0] ^= 0xFF;

        assert!(open(&sealed, &key).is_err());
    }

    #[test]
    fn truncated_input_fails_to_open() {
        let key = test_key();
        let sealed = seal(b"message", &key).unwrap();

        let result = open(&sealed[..NONCE_SIZE + TAG_SIZE - 1], &key);

        assert!(matches!(
            result,
            Err(CryptoError::DecryptionFailed { reason })
                if reason.contains("too short")
        ));
    }

    #[test]
    fn empty_input_fails_to_open() {
        let key = test_key();
        assert!(open(b"", &key).is_err());
    }
}

//! Fuzz target for opening sealed blobs.
//!
//! `open` must reject arbitrary input with an error, never panic, and never
//! hand back plaintext for bytes that were not sealed under the key.

#![no_main]

use cipherbin_crypto::Key;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let key = Key::from_token(&"A".repeat(44)).expect("static token is valid");

    // Forging a Poly1305 tag is infeasible; arbitrary bytes must not open.
    assert!(cipherbin_crypto::open(data, &key).is_err());
});

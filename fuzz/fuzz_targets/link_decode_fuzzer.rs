//! Fuzz target for link decoding.
//!
//! Arbitrary byte sequences must never panic the decoder: anything that is
//! not a well-formed link comes back as a typed error.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(link) = std::str::from_utf8(data) {
        let _ = cipherbin_link::decode(link, "https://cipherb.in");
    }
});

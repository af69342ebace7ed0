//! Encoding and decoding of one-time message links.
//!
//! A link has the fixed shape `{base_url}/msg?bin={identifier};{key}`. The
//! identifier and key alphabets are restricted at generation time (hex and
//! hyphen for identifiers, url-safe base64 for key tokens), so neither part
//! can contain the `?`, `=` or `;` separators: encoding never escapes, and
//! decoding splits exactly once.

use std::fmt;

use crate::error::LinkError;

/// Query path under which a message link lives, relative to a base url.
pub const MSG_QUERY: &str = "/msg?bin=";

/// Identifier and key recovered from a well-formed link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedLink<'a> {
    /// Message identifier part
    pub id: &'a str,
    /// Key token part
    pub key: &'a str,
}

/// Encode an identifier and key token into a share link under `base_url`.
pub fn encode<I: fmt::Display>(base_url: &str, id: &I, key_token: &str) -> String {
    format!("{base_url}{MSG_QUERY}{id};{key_token}")
}

/// Decode a link against the expected `base_url`.
///
/// # Errors
///
/// [`LinkError`] when the link does not start with
/// `{base_url}/msg?bin=`, or when the remainder is not exactly two
/// non-empty `;`-separated parts. No best-effort parsing.
pub fn decode<'a>(link: &'a str, base_url: &str) -> Result<DecodedLink<'a>, LinkError> {
    let prefix = format!("{base_url}{MSG_QUERY}");
    let Some(payload) = link.strip_prefix(&prefix) else {
        return Err(LinkError::PrefixMismatch { prefix });
    };

    let mut parts = payload.split(';');
    let (Some(id), Some(key), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(LinkError::MalformedPayload { parts: payload.split(';').count() });
    };

    if id.is_empty() {
        return Err(LinkError::EmptyIdentifier);
    }
    if key.is_empty() {
        return Err(LinkError::EmptyKey);
    }

    Ok(DecodedLink { id, key })
}

/// Re-express a link under a different base url.
///
/// Decodes against `from_base` and re-encodes under `to_base`; the
/// identifier/key pair is preserved exactly.
///
/// # Errors
///
/// [`LinkError`] when `link` is not a well-formed link under `from_base`.
pub fn rebase(link: &str, from_base: &str, to_base: &str) -> Result<String, LinkError> {
    let decoded = decode(link, from_base)?;
    Ok(encode(to_base, &decoded.id, decoded.key))
}

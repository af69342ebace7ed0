//! Cipherbin Link Codec
//!
//! A share link binds a message identifier and its decryption key into one
//! opaque string:
//!
//! ```text
//! {base_url}/msg?bin={identifier};{key}
//! ```
//!
//! The identifier addresses the stored ciphertext; the key never reaches the
//! server and exists only inside the link. Two base urls name the same
//! resource (one browser-facing, one API-facing) and a link converts between
//! them losslessly.
//!
//! Decoding is strict: a string either matches the shape exactly or is
//! rejected with a typed [`LinkError`], never truncated, never defaulted.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod codec;
mod error;
pub mod id;

pub use codec::{DecodedLink, MSG_QUERY, decode, encode, rebase};
pub use error::LinkError;
pub use id::{MESSAGE_ID_LEN, MessageId};

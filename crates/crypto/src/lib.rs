//! Signing and encoding primitives for a speech-recognition API.
//!
//! This crate provides:
//! - HMAC-SHA256 / HMAC-SHA1 returning raw, fixed-length digests
//! - MD5 as lowercase hex
//! - Base64 that drops trailing `=` before decoding
//! - Percent-encoding that leaves `&` and `=` unescaped
//! - A blocking delay
//! - Request signing for the API's WebSocket and real-time transcription endpoints
//!
//! The Base64 decoding and URL escaping rules match what the API accepts, not
//! the RFCs. Do not swap them for standard behaviour.

#![warn(missing_docs)]

mod base64_impl;
mod error;
mod hash;
mod hmac_impl;
mod timing;
mod url;

pub mod config;
pub mod sign;

#[cfg(feature = "wasm")]
mod wasm;

pub use base64_impl::{base64_decode, base64_encode, padding_len};
pub use config::{Credentials, Endpoint};
pub use error::{CryptoError, Result};
pub use hash::{md5_hex, MD5_HEX_LEN};
pub use hmac_impl::{hmac_sha1, hmac_sha256, HMAC_SHA1_LEN, HMAC_SHA256_LEN};
pub use timing::delay;
pub use url::{url_encode_custom, SPEECH_API_ESCAPE};

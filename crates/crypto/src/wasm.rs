//! WASM bindings for the signing primitives.

use wasm_bindgen::prelude::*;

use crate::{Credentials, Endpoint};

/// Generate an HMAC-SHA256 digest and return it as Base64.
#[wasm_bindgen]
pub fn hmac_sha256_base64(message: &str, key: &str) -> String {
    crate::base64_encode(&crate::hmac_sha256(message.as_bytes(), key.as_bytes()))
}

/// Generate an HMAC-SHA1 digest and return it as Base64.
#[wasm_bindgen]
pub fn hmac_sha1_base64(message: &str, key: &str) -> String {
    crate::base64_encode(&crate::hmac_sha1(message.as_bytes(), key.as_bytes()))
}

/// MD5 of a string as lowercase hex.
#[wasm_bindgen]
pub fn md5_hex(data: &str) -> String {
    crate::md5_hex(data.as_bytes())
}

/// Base64-encode raw bytes.
#[wasm_bindgen]
pub fn base64_encode(data: &[u8]) -> String {
    crate::base64_encode(data)
}

/// Base64-decode text. Malformed input yields an empty array.
#[wasm_bindgen]
pub fn base64_decode(text: &str) -> Vec<u8> {
    crate::base64_decode(text).unwrap_or_default()
}

/// Percent-encode with `&` and `=` left as is.
#[wasm_bindgen]
pub fn url_encode_custom(text: &str) -> String {
    crate::url_encode_custom(text)
}

/// Build a signed WebSocket URL.
///
/// # Returns
/// The URL, or an empty string if the credentials or endpoint are invalid.
#[wasm_bindgen]
pub fn auth_url(api_key: &str, api_secret: &str, host: &str, path: &str, date: &str) -> String {
    let credentials = Credentials::new("", api_key, api_secret);
    let endpoint = Endpoint::new(host, path);
    crate::sign::auth_url(&credentials, &endpoint, date).unwrap_or_default()
}

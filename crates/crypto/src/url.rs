//! Percent-encoding with the speech API's non-standard unreserved set.
//!
//! Only ASCII letters, digits, `&` and `=` pass through. Everything else,
//! including `-`, `.`, `_`, `~` and every byte of a multi-byte character, is
//! written as `%XY` with uppercase hex. The API splits query parameters on
//! literal `&` and `=` before decoding, so those two must stay unescaped.

use percent_encoding::{percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped by [`url_encode_custom`].
pub const SPEECH_API_ESCAPE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'&').remove(b'=');

/// Percent-encode `text` byte by byte using [`SPEECH_API_ESCAPE`].
pub fn url_encode_custom(text: &str) -> String {
    percent_encode(text.as_bytes(), SPEECH_API_ESCAPE).to_string()
}

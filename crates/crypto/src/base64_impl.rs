//! Base64 codec with the padding handling the speech API relies on.
//!
//! Encoding is plain RFC 4648 with `=` padding. Decoding strips every trailing
//! `=` before decoding so a padded audio frame never picks up NUL bytes.

use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::{CryptoError, Result};

/// Decoder for input whose padding has already been removed.
///
/// Non-zero bits left over in the final symbol are ignored.
const UNPADDED_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::RequireNone)
        .with_decode_allow_trailing_bits(true),
);

/// Number of `=` characters appended when encoding `len` bytes.
pub fn padding_len(len: usize) -> usize {
    (3 - len % 3) % 3
}

/// Encode bytes as standard, padded Base64.
pub fn base64_encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode Base64 text, ignoring any number of trailing `=`.
///
/// Empty input, and input made only of `=`, decode to an empty vector.
///
/// # Errors
/// Returns [`CryptoError::Encoding`] if the text contains characters outside the
/// standard alphabet or ends with a dangling single symbol.
pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    let trimmed = text.trim_end_matches('=');
    UNPADDED_LENIENT
        .decode(trimmed)
        .map_err(|e| CryptoError::Encoding(e.to_string()))
}

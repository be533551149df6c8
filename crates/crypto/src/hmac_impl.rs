//! HMAC implementations returning raw digest bytes.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;
type HmacSha1 = Hmac<Sha1>;

/// Length of an HMAC-SHA256 digest in bytes.
pub const HMAC_SHA256_LEN: usize = 32;

/// Length of an HMAC-SHA1 digest in bytes.
pub const HMAC_SHA1_LEN: usize = 20;

/// Generate an HMAC-SHA256 digest.
///
/// # Arguments
/// * `data` - Message to sign
/// * `key` - Secret key bytes, any length
///
/// # Returns
/// The raw 32-byte digest. It is binary and may contain NUL bytes.
pub fn hmac_sha256(data: &[u8], key: &[u8]) -> [u8; HMAC_SHA256_LEN] {
    let mut mac = HmacSha256::new_from_slice(key)
        .expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

/// Generate an HMAC-SHA1 digest.
///
/// # Arguments
/// * `data` - Message to sign
/// * `key` - Secret key bytes, any length
///
/// # Returns
/// The raw 20-byte digest.
pub fn hmac_sha1(data: &[u8], key: &[u8]) -> [u8; HMAC_SHA1_LEN] {
    let mut mac = HmacSha1::new_from_slice(key)
        .expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn test_hmac_sha256_known_vector() {
        let digest = hmac_sha256(FOX, b"key");
        assert_eq!(
            hex::encode(digest),
            "f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
        );
    }

    #[test]
    fn test_hmac_sha1_known_vector() {
        let digest = hmac_sha1(FOX, b"key");
        assert_eq!(hex::encode(digest), "de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9");
    }

    #[test]
    fn test_digest_lengths_with_empty_inputs() {
        let cases: [(&[u8], &[u8]); 4] = [
            (b"", b""),
            (b"hello", b""),
            (b"", b"secret"),
            (b"hello", b"secret"),
        ];
        for (data, key) in cases {
            assert_eq!(hmac_sha256(data, key).len(), HMAC_SHA256_LEN);
            assert_eq!(hmac_sha1(data, key).len(), HMAC_SHA1_LEN);
        }
    }

    #[test]
    fn test_long_key_is_accepted() {
        // Keys longer than the block size are hashed first.
        let key = vec![0xAA; 131];
        let digest = hmac_sha256(b"Test Using Larger Than Block-Size Key - Hash Key First", &key);
        assert_eq!(
            hex::encode(digest),
            "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54"
        );
    }

    #[test]
    fn test_digest_is_key_dependent() {
        assert_ne!(hmac_sha1(b"payload", b"a"), hmac_sha1(b"payload", b"b"));
    }
}

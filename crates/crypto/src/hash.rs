//! MD5 digests in the lowercase hex form the speech API expects.

/// Length of the hex-encoded MD5 digest.
pub const MD5_HEX_LEN: usize = 32;

/// Hash `data` with MD5 and return the 32-character lowercase hex digest.
pub fn md5_hex(data: &[u8]) -> String {
    hex::encode(md5::compute(data).0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_empty() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_md5_abc() {
        assert_eq!(md5_hex(b"abc"), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn test_md5_is_lowercase_hex() {
        let digest = md5_hex("中文 payload".as_bytes());
        assert_eq!(digest.len(), MD5_HEX_LEN);
        assert!(digest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}

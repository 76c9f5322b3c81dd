//! Wire framing of encrypted output.
//!
//! Layout before encoding:
//!   [ 16-byte IV | ciphertext, N * 16 bytes, N >= 1 ]
//!
//! The whole buffer is base64-encoded with the standard alphabet and
//! `=` padding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::cipher::IV_LEN;
use super::padding::BLOCK_SIZE;
use crate::errors::{PwCryptError, Result};

/// A decoded blob split into its IV and ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub iv: [u8; IV_LEN],
    pub ciphertext: Vec<u8>,
}

/// Concatenate `iv` and `ciphertext` and base64-encode the result.
pub fn encode_blob(iv: &[u8; IV_LEN], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(IV_LEN + ciphertext.len());
    raw.extend_from_slice(iv);
    raw.extend_from_slice(ciphertext);
    STANDARD.encode(raw)
}

/// Decode `encoded` and split it into IV and ciphertext.
///
/// Checks happen in order: base64 validity, room for the IV, then a
/// non-empty block-aligned ciphertext.
pub fn decode_blob(encoded: &str) -> Result<Blob> {
    let raw = STANDARD
        .decode(encoded.as_bytes())
        .map_err(|e| PwCryptError::InvalidEncoding(e.to_string()))?;

    if raw.len() < IV_LEN {
        return Err(PwCryptError::TruncatedInput(raw.len()));
    }

    let (iv_bytes, ciphertext) = raw.split_at(IV_LEN);
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(PwCryptError::InvalidLength(ciphertext.len()));
    }

    let mut iv = [0u8; IV_LEN];
    iv.copy_from_slice(iv_bytes);

    Ok(Blob {
        iv,
        ciphertext: ciphertext.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn iv_comes_first() {
        let iv = [0xAAu8; IV_LEN];
        let ct = [0x55u8; 16];
        let raw = STANDARD.decode(encode_blob(&iv, &ct)).unwrap();
        assert_eq!(&raw[..IV_LEN], &iv);
        assert_eq!(&raw[IV_LEN..], &ct);
    }

    #[test]
    fn two_blocks_encode_to_44_chars() {
        let encoded = encode_blob(&[1u8; IV_LEN], &[2u8; 16]);
        assert_eq!(encoded.len(), 44);
        assert!(encoded.ends_with('='));
    }

    #[test]
    fn decode_splits_iv_and_ciphertext() {
        let iv = [9u8; IV_LEN];
        let ct = [7u8; 32];
        let blob = decode_blob(&encode_blob(&iv, &ct)).unwrap();
        assert_eq!(blob.iv, iv);
        assert_eq!(blob.ciphertext, ct.to_vec());
    }

    #[test]
    fn non_base64_is_encoding_error() {
        let err = decode_blob("this is *not* base64!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn missing_base64_padding_is_encoding_error() {
        let unpadded = STANDARD.encode([0u8; 32]).trim_end_matches('=').to_string();
        let err = decode_blob(&unpadded).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
    }

    #[test]
    fn shorter_than_iv_is_truncated() {
        let err = decode_blob(&STANDARD.encode([0u8; 15])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);

        let err = decode_blob("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedInput);
    }

    #[test]
    fn iv_only_is_invalid_length() {
        let err = decode_blob(&STANDARD.encode([0u8; 16])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }

    #[test]
    fn unaligned_ciphertext_is_invalid_length() {
        let err = decode_blob(&STANDARD.encode([0u8; 16 + 5])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);

        let err = decode_blob(&STANDARD.encode([0u8; 16 + 33])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }
}

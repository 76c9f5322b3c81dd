//! PKCS#7 padding to the AES block size.
//!
//! A pad is always appended: a message that already fills whole blocks
//! gets one extra block of sixteen `0x10` bytes.

use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroizing;

use crate::errors::{PwCryptError, Result};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Number of pad bytes `pad` appends to a message of `len` bytes (1..=16).
pub fn pad_len(len: usize) -> usize {
    BLOCK_SIZE - (len % BLOCK_SIZE)
}

/// Return a copy of `data` extended to a multiple of `BLOCK_SIZE`.
pub fn pad(data: &[u8]) -> Zeroizing<Vec<u8>> {
    let n = pad_len(data.len());
    let mut out = Zeroizing::new(Vec::with_capacity(data.len() + n));
    out.extend_from_slice(data);
    // n <= 16, fits in a byte.
    out.resize(data.len() + n, n as u8);
    out
}

/// Validate the trailing pad of `data` and return the message before it.
///
/// Fails with `InvalidPadding` if the last byte is outside 1..=16, longer
/// than the buffer, or any of the pad bytes disagree with it.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let Some(&last) = data.last() else {
        return Err(PwCryptError::InvalidPadding);
    };

    let n = usize::from(last);
    if n == 0 || n > BLOCK_SIZE || n > data.len() {
        return Err(PwCryptError::InvalidPadding);
    }

    let (message, tail) = data.split_at(data.len() - n);
    let valid = tail
        .iter()
        .fold(Choice::from(1u8), |acc, b| acc & b.ct_eq(&last));

    if bool::from(valid) {
        Ok(message)
    } else {
        Err(PwCryptError::InvalidPadding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn pad_short_message() {
        let padded = pad(b"hello");
        assert_eq!(padded.len(), 16);
        assert_eq!(&padded[..5], b"hello");
        assert!(padded[5..].iter().all(|&b| b == 11));
    }

    #[test]
    fn pad_full_block_adds_another_block() {
        let padded = pad(&[0x41; 16]);
        assert_eq!(padded.len(), 32);
        assert!(padded[16..].iter().all(|&b| b == 16));
    }

    #[test]
    fn pad_empty_message_is_one_block() {
        let padded = pad(b"");
        assert_eq!(padded.as_slice(), &[16u8; 16]);
    }

    #[test]
    fn pad_len_is_always_in_range() {
        for len in 0..64 {
            let n = pad_len(len);
            assert!((1..=BLOCK_SIZE).contains(&n), "len {len} gave {n}");
            assert_eq!((len + n) % BLOCK_SIZE, 0);
        }
    }

    #[test]
    fn unpad_strips_what_pad_added() {
        for len in 0..40 {
            let msg = vec![0x5a; len];
            let padded = pad(&msg);
            assert_eq!(unpad(&padded).unwrap(), msg.as_slice());
        }
    }

    #[test]
    fn unpad_rejects_zero_pad_byte() {
        let mut block = [7u8; 16];
        block[15] = 0;
        assert_eq!(
            unpad(&block).unwrap_err().kind(),
            ErrorKind::InvalidPadding
        );
    }

    #[test]
    fn unpad_rejects_pad_byte_above_block_size() {
        let block = [17u8; 32];
        assert_eq!(
            unpad(&block).unwrap_err().kind(),
            ErrorKind::InvalidPadding
        );
    }

    #[test]
    fn unpad_rejects_inconsistent_pad_bytes() {
        let mut block = [3u8; 16];
        block[13] = 2;
        assert_eq!(
            unpad(&block).unwrap_err().kind(),
            ErrorKind::InvalidPadding
        );
    }

    #[test]
    fn unpad_rejects_empty_input() {
        assert_eq!(unpad(&[]).unwrap_err().kind(), ErrorKind::InvalidPadding);
    }

    #[test]
    fn unpad_rejects_pad_longer_than_buffer() {
        assert_eq!(
            unpad(&[4, 4, 4]).unwrap_err().kind(),
            ErrorKind::InvalidPadding
        );
    }
}

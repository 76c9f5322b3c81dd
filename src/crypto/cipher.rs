//! AES-256 in CBC mode over whole blocks.
//!
//! Padding is handled by [`super::padding`]; the cipher here only ever
//! sees block-aligned buffers and rejects anything else with
//! `InvalidLength` instead of padding it.

use aes::Aes256;
use cbc::cipher::block_padding::NoPadding;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::Zeroizing;

use super::padding::BLOCK_SIZE;
use crate::errors::{PwCryptError, Result};

/// Size of the CBC initialization vector in bytes.
pub const IV_LEN: usize = 16;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Draw a fresh IV from the operating system's randomness source.
pub fn generate_iv() -> Result<[u8; IV_LEN]> {
    let mut iv = [0u8; IV_LEN];
    OsRng
        .try_fill_bytes(&mut iv)
        .map_err(|e| PwCryptError::RandomnessUnavailable(e.to_string()))?;
    Ok(iv)
}

fn check_aligned(len: usize) -> Result<()> {
    if len == 0 || len % BLOCK_SIZE != 0 {
        return Err(PwCryptError::InvalidLength(len));
    }
    Ok(())
}

/// Encrypt block-aligned `padded` bytes under `key` and `iv`.
///
/// The output has the same length as the input.
pub fn encrypt_blocks(key: &[u8], iv: &[u8; IV_LEN], padded: &[u8]) -> Result<Vec<u8>> {
    check_aligned(padded.len())?;

    let cipher = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| PwCryptError::CipherInit(format!("invalid key length: {e}")))?;

    let mut buf = padded.to_vec();
    let len = buf.len();
    cipher
        .encrypt_padded_mut::<NoPadding>(&mut buf, len)
        .map_err(|_| PwCryptError::InvalidLength(len))?;
    Ok(buf)
}

/// Decrypt block-aligned `ciphertext` under `key` and `iv`.
///
/// The result still carries its padding.
pub fn decrypt_blocks(
    key: &[u8],
    iv: &[u8; IV_LEN],
    ciphertext: &[u8],
) -> Result<Zeroizing<Vec<u8>>> {
    check_aligned(ciphertext.len())?;

    let cipher = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|e| PwCryptError::CipherInit(format!("invalid key length: {e}")))?;

    let mut buf = Zeroizing::new(ciphertext.to_vec());
    cipher
        .decrypt_padded_mut::<NoPadding>(buf.as_mut_slice())
        .map_err(|_| PwCryptError::InvalidLength(ciphertext.len()))?;
    Ok(buf)
}

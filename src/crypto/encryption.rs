//! Password-based encryption of text into a base64 blob, and back.
//!
//! `encrypt` derives a key from the password, pads the plaintext,
//! draws a fresh random IV, encrypts with AES-256-CBC and returns
//! `base64(iv || ciphertext)`.  `decrypt` reverses each step.
//!
//! There is no authentication tag: the pad check is the only thing that
//! can notice a wrong password or a modified blob, and it does not
//! always notice.

use super::blob::{decode_blob, encode_blob};
use super::cipher::{decrypt_blocks, encrypt_blocks, generate_iv, IV_LEN};
use super::kdf::derive_key;
use super::padding::{pad, unpad};
use crate::errors::Result;

/// Encrypt `plaintext` under `password`.
///
/// Each call uses a new random IV, so encrypting the same input twice
/// gives two different blobs.
pub fn encrypt(plaintext: &[u8], password: &str) -> Result<String> {
    let iv = generate_iv()?;
    encrypt_with_iv(plaintext, password, &iv)
}

/// Encrypt with a caller-supplied IV.
///
/// Reusing an IV with the same password leaks whether two plaintexts
/// share a prefix; `encrypt` is the right entry point for normal use.
pub fn encrypt_with_iv(plaintext: &[u8], password: &str, iv: &[u8; IV_LEN]) -> Result<String> {
    let key = derive_key(password);
    let padded = pad(plaintext);
    let ciphertext = encrypt_blocks(key.as_bytes(), iv, &padded)?;

    tracing::debug!(
        plaintext_len = plaintext.len(),
        ciphertext_len = ciphertext.len(),
        "encrypted"
    );

    Ok(encode_blob(iv, &ciphertext))
}

/// Decrypt a blob produced by `encrypt`.
///
/// A wrong password usually fails with `InvalidPadding`, but may also
/// return garbage bytes.
pub fn decrypt(encoded: &str, password: &str) -> Result<Vec<u8>> {
    let blob = decode_blob(encoded)?;
    let key = derive_key(password);

    let decrypted = decrypt_blocks(key.as_bytes(), &blob.iv, &blob.ciphertext)?;
    let plaintext = unpad(&decrypted).map_err(|e| {
        tracing::debug!(
            ciphertext_len = blob.ciphertext.len(),
            "padding check failed after decryption"
        );
        e
    })?;

    tracing::debug!(plaintext_len = plaintext.len(), "decrypted");
    Ok(plaintext.to_vec())
}

/// Decrypt and interpret the result as text.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn decrypt_to_string(encoded: &str, password: &str) -> Result<String> {
    let bytes = decrypt(encoded, password)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

//! Cryptographic primitives for pwcrypt.
//!
//! This module provides:
//! - SHA-256 password-to-key derivation (`kdf`)
//! - PKCS#7 padding (`padding`)
//! - AES-256-CBC over whole blocks and IV generation (`cipher`)
//! - IV + ciphertext framing and base64 (`blob`)
//! - The password-level `encrypt` / `decrypt` pair (`encryption`)

pub mod blob;
pub mod cipher;
pub mod encryption;
pub mod kdf;
pub mod padding;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use blob::{decode_blob, encode_blob, Blob};
pub use cipher::{decrypt_blocks, encrypt_blocks, generate_iv, IV_LEN};
pub use encryption::{decrypt, decrypt_to_string, encrypt, encrypt_with_iv};
pub use kdf::{derive_key, DerivedKey, KEY_LEN};
pub use padding::{pad, unpad, BLOCK_SIZE};

//! Password-to-key derivation.
//!
//! The key is a single SHA-256 pass over the UTF-8 bytes of the
//! password.  There is no salt and no iteration count, so the same
//! password always yields the same key.

use sha2::{Digest, Sha256};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of the derived key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte symmetric key that zeroes its memory when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to hand to the cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive the 256-bit key for `password`.
///
/// Any password is accepted, including the empty string.
pub fn derive_key(password: &str) -> DerivedKey {
    let digest = Sha256::digest(password.as_bytes());
    DerivedKey::new(digest.into())
}

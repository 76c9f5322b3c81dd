use thiserror::Error;

/// All errors that can occur in pwcrypt.
#[derive(Debug, Error)]
pub enum PwCryptError {
    // --- Encryption errors ---
    #[error("Randomness source unavailable: {0}")]
    RandomnessUnavailable(String),

    #[error("Cipher initialization failed: {0}")]
    CipherInit(String),

    // --- Decryption errors ---
    #[error("Input is not valid base64: {0}")]
    InvalidEncoding(String),

    #[error("Input too short: {0} bytes, need at least 16 for the IV")]
    TruncatedInput(usize),

    #[error("Ciphertext length {0} is not a positive multiple of 16")]
    InvalidLength(usize),

    #[error("Invalid padding: wrong password or corrupted data")]
    InvalidPadding,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Payload-free discriminant of [`PwCryptError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Randomness,
    CipherInit,
    Encoding,
    TruncatedInput,
    InvalidLength,
    InvalidPadding,
    Config,
    Io,
}

impl PwCryptError {
    /// Which failure kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RandomnessUnavailable(_) => ErrorKind::Randomness,
            Self::CipherInit(_) => ErrorKind::CipherInit,
            Self::InvalidEncoding(_) => ErrorKind::Encoding,
            Self::TruncatedInput(_) => ErrorKind::TruncatedInput,
            Self::InvalidLength(_) => ErrorKind::InvalidLength,
            Self::InvalidPadding => ErrorKind::InvalidPadding,
            Self::ConfigError(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Convenience type alias for pwcrypt results.
pub type Result<T> = std::result::Result<T, PwCryptError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_each_variant() {
        assert_eq!(
            PwCryptError::TruncatedInput(3).kind(),
            ErrorKind::TruncatedInput
        );
        assert_eq!(PwCryptError::InvalidLength(5).kind(), ErrorKind::InvalidLength);
        assert_eq!(PwCryptError::InvalidPadding.kind(), ErrorKind::InvalidPadding);
        assert_eq!(
            PwCryptError::InvalidEncoding("bad".into()).kind(),
            ErrorKind::Encoding
        );
    }

    #[test]
    fn messages_carry_the_offending_length() {
        let msg = PwCryptError::TruncatedInput(7).to_string();
        assert!(msg.contains("7 bytes"), "got: {msg}");

        let msg = PwCryptError::InvalidLength(21).to_string();
        assert!(msg.contains("21"), "got: {msg}");
    }
}

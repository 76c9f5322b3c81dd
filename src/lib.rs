pub mod cli;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod logging;

pub use crypto::{decrypt, encrypt};
pub use errors::{ErrorKind, PwCryptError, Result};

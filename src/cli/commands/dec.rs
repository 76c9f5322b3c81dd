//! `pwcrypt dec`: decrypt a blob and print the text.

use crate::cli::output;
use crate::crypto;
use crate::errors::Result;

/// Execute the `dec` command.
pub fn execute(password: &str, blob: &str) -> Result<()> {
    let text = crypto::decrypt_to_string(blob, password)?;
    output::decrypted(&text);
    Ok(())
}

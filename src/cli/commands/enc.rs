//! `pwcrypt enc`: encrypt text and print the blob.

use crate::cli::output;
use crate::crypto;
use crate::errors::Result;

/// Execute the `enc` command.
pub fn execute(password: &str, text: &str) -> Result<()> {
    let blob = crypto::encrypt(text.as_bytes(), password)?;
    output::encrypted(&blob);
    Ok(())
}

//! Command-line parser and the `enc` / `dec` commands.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::errors::Result;

/// pwcrypt CLI: password-based text encryption.
#[derive(Parser)]
#[command(
    name = "pwcrypt",
    about = "Password-based text encryption (AES-256-CBC, base64 output)",
    version
)]
pub struct Cli {
    /// Operation to run (case-insensitive)
    #[arg(value_enum, ignore_case = true)]
    pub command: Command,

    /// Password the key is derived from
    #[arg(allow_hyphen_values = true)]
    pub password: String,

    /// Text to encrypt, or the base64 blob to decrypt
    #[arg(allow_hyphen_values = true)]
    pub text: String,

    /// Anything after the text is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file to use (default: ./.pwcrypt.toml if present)
    #[arg(long, env = "PWCRYPT_CONFIG")]
    pub config: Option<PathBuf>,
}

/// The two operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Command {
    /// Encrypt text with a password and print the base64 blob
    Enc,
    /// Decrypt a base64 blob with a password and print the text
    Dec,
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Load settings from `--config` if given, else from the working directory.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    match cli.config {
        Some(ref path) => Settings::load_file(path),
        None => Settings::load(&std::env::current_dir()?),
    }
}
